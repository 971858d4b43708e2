use crate::{
    dialect::{Dialect, check_identifier},
    expr::Expr,
    projection::ColumnProjection,
    template::{FieldDef, FieldTemplate},
};
use indexmap::IndexMap;
use model::{errors::ConfigError, schema::Cardinality};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub schema: Option<String>,
    pub name: String,
}

impl TableRef {
    /// Parses an optionally schema-qualified name, e.g. `public.customers`.
    pub fn new(name: &str) -> Self {
        match name.trim().split_once('.') {
            Some((schema, table)) => TableRef {
                schema: Some(schema.to_string()),
                name: table.to_string(),
            },
            None => TableRef {
                schema: None,
                name: name.trim().to_string(),
            },
        }
    }

    pub(crate) fn render(&self, dialect: &dyn Dialect) -> Result<String, ConfigError> {
        check_identifier(&self.name)?;
        match &self.schema {
            Some(schema) => {
                check_identifier(schema)?;
                Ok(format!(
                    "{}.{}",
                    dialect.quote_identifier(schema),
                    dialect.quote_identifier(&self.name)
                ))
            }
            None => Ok(dialect.quote_identifier(&self.name)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
}

/// A table declaration: name plus field template. The entry point for both
/// plain projections and join-tree declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    table: TableRef,
    template: FieldTemplate,
}

impl Table {
    pub fn new(name: &str, fields: Vec<FieldDef>) -> Self {
        Table {
            table: TableRef::new(name),
            template: FieldTemplate::new(fields),
        }
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    /// The unaliased projection over the full template.
    pub fn columns(&self) -> ColumnProjection {
        ColumnProjection::new(self.template.clone())
    }

    /// Declares this table as an inner-joined level of a join tree.
    pub fn join(&self, spec: JoinSpec) -> Result<JoinNode, ConfigError> {
        self.join_as(JoinKind::Inner, spec)
    }

    /// Declares this table as a left-outer-joined level, so a parent can
    /// exist without any matching rows here.
    pub fn left_join(&self, spec: JoinSpec) -> Result<JoinNode, ConfigError> {
        self.join_as(JoinKind::Left, spec)
    }

    fn join_as(&self, kind: JoinKind, spec: JoinSpec) -> Result<JoinNode, ConfigError> {
        let alias = spec.alias.trim().to_string();
        if alias.is_empty() {
            return Err(ConfigError::BlankAlias);
        }
        check_identifier(&alias)?;

        if spec.pk.is_empty() {
            return Err(ConfigError::EmptyPrimaryKey(alias));
        }

        // Omit before extend, so extensions are always present and an
        // omission can never shadow one.
        let omitted: Vec<&str> = spec.omit.iter().map(String::as_str).collect();
        let projection = self
            .columns()
            .omit(&omitted)
            .extend(spec.extend)
            .aliased(&alias);

        for key in &spec.pk {
            if !projection.names().any(|name| name == key) {
                return Err(ConfigError::UnknownPrimaryKey {
                    alias,
                    field: key.clone(),
                });
            }
        }

        let mut children = IndexMap::new();
        for (name, child) in spec.children {
            if children.insert(name.clone(), child).is_some() {
                return Err(ConfigError::DuplicateChild(name));
            }
        }

        Ok(JoinNode {
            table: self.table.clone(),
            alias,
            pk: spec.pk,
            on: spec.on,
            kind,
            cardinality: spec.cardinality,
            projection,
            children,
        })
    }
}

/// Fluent declaration for one join level: alias, primary key, ON text,
/// field adjustments, cardinality and named children.
#[derive(Debug)]
pub struct JoinSpec {
    alias: String,
    pk: Vec<String>,
    on: Option<String>,
    cardinality: Cardinality,
    omit: Vec<String>,
    extend: Vec<FieldDef>,
    children: Vec<(String, JoinNode)>,
}

impl JoinSpec {
    pub fn new(alias: &str, pk: &[&str]) -> Self {
        JoinSpec {
            alias: alias.to_string(),
            pk: pk.iter().map(|k| k.to_string()).collect(),
            on: None,
            cardinality: Cardinality::Many,
            omit: Vec::new(),
            extend: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the ON condition, spliced verbatim into the join clause.
    pub fn on(mut self, condition: &str) -> Self {
        self.on = Some(condition.to_string());
        self
    }

    /// Switches this level from an array of children to a single nullable
    /// child per parent.
    pub fn single(mut self) -> Self {
        self.cardinality = Cardinality::One;
        self
    }

    pub fn omit(mut self, names: &[&str]) -> Self {
        self.omit.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn extend(mut self, name: &str, expr: Expr) -> Self {
        self.extend.push(FieldDef::computed(name, expr));
        self
    }

    /// Attaches a child level under the given result-field name. The child
    /// is moved in; one built node cannot sit under two sibling names.
    pub fn child(mut self, name: &str, node: JoinNode) -> Self {
        self.children.push((name.to_string(), node));
        self
    }
}

/// One validated level of the join tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinNode {
    pub(crate) table: TableRef,
    pub(crate) alias: String,
    pub(crate) pk: Vec<String>,
    pub(crate) on: Option<String>,
    pub(crate) kind: JoinKind,
    pub(crate) cardinality: Cardinality,
    pub(crate) projection: ColumnProjection,
    pub(crate) children: IndexMap<String, JoinNode>,
}

impl JoinNode {
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn projection(&self) -> &ColumnProjection {
        &self.projection
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &JoinNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }
}

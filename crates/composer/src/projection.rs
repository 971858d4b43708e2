use crate::{
    dialect::{Dialect, check_identifier},
    template::{FieldDef, FieldKind, FieldTemplate},
};
use model::errors::ConfigError;

/// A named field set for one table or subquery, rendered as aliased SQL
/// fragments.
///
/// With an alias `a`, a plain field renders `"a"."name" AS "a_name"`; a
/// computed field renders its expression text followed by `AS "a_name"`.
/// Without an alias the fragment is the bare quoted name, and `AS` is
/// dropped exactly when the rendered expression already equals the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProjection {
    template: FieldTemplate,
    alias: Option<String>,
}

impl ColumnProjection {
    pub fn new(template: FieldTemplate) -> Self {
        ColumnProjection {
            template,
            alias: None,
        }
    }

    pub fn aliased(self, alias: &str) -> Self {
        ColumnProjection {
            template: self.template,
            alias: Some(alias.to_string()),
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.template.names()
    }

    pub fn fields(&self) -> &[FieldDef] {
        self.template.fields()
    }

    /// Returns a projection narrowed to the named fields, in declared order.
    pub fn pick(&self, names: &[&str]) -> Self {
        ColumnProjection {
            template: self.template.keep(names),
            alias: self.alias.clone(),
        }
    }

    /// Returns a projection without the named fields.
    pub fn omit(&self, names: &[&str]) -> Self {
        ColumnProjection {
            template: self.template.without(names),
            alias: self.alias.clone(),
        }
    }

    /// Appends derived fields; prior fields keep their position and names.
    pub fn extend(&self, fields: Vec<FieldDef>) -> Self {
        ColumnProjection {
            template: self.template.append(fields),
            alias: self.alias.clone(),
        }
    }

    /// Renders one fragment per field, in template order.
    pub fn project(&self, dialect: &dyn Dialect) -> Result<Vec<String>, ConfigError> {
        if let Some(alias) = &self.alias {
            check_identifier(alias)?;
        }

        let mut fragments = Vec::with_capacity(self.template.len());
        for field in self.template.fields() {
            check_identifier(&field.name)?;

            let target_name = match &self.alias {
                Some(alias) => format!("{}_{}", alias, field.name),
                None => field.name.clone(),
            };
            let target = dialect.quote_identifier(&target_name);

            let rendered = match &field.kind {
                FieldKind::Computed(expr) => expr.text().to_string(),
                FieldKind::Scalar(_) => match &self.alias {
                    Some(alias) => format!(
                        "{}.{}",
                        dialect.quote_identifier(alias),
                        dialect.quote_identifier(&field.name)
                    ),
                    None => dialect.quote_identifier(&field.name),
                },
            };

            if rendered == target {
                fragments.push(target);
            } else {
                fragments.push(format!("{rendered} AS {target}"));
            }
        }
        Ok(fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dialect::Postgres, expr::Expr};
    use model::core::scalar::ScalarKind;

    fn projection() -> ColumnProjection {
        ColumnProjection::new(FieldTemplate::new(vec![
            FieldDef::scalar("id", ScalarKind::Number),
            FieldDef::scalar("name", ScalarKind::String),
        ]))
    }

    #[test]
    fn unaliased_fields_render_bare() {
        let fragments = projection().project(&Postgres).unwrap();
        assert_eq!(fragments, vec![r#""id""#, r#""name""#]);
    }

    #[test]
    fn aliased_fields_render_qualified_and_prefixed() {
        let fragments = projection().aliased("c").project(&Postgres).unwrap();
        assert_eq!(
            fragments,
            vec![r#""c"."id" AS "c_id""#, r#""c"."name" AS "c_name""#]
        );
    }

    #[test]
    fn computed_fields_render_expression_text() {
        let fragments = projection()
            .extend(vec![FieldDef::computed(
                "adult",
                Expr::boolean("case when c.age >= 21 then true else false end"),
            )])
            .aliased("c")
            .project(&Postgres)
            .unwrap();
        assert_eq!(
            fragments[2],
            r#"case when c.age >= 21 then true else false end AS "c_adult""#
        );
    }

    #[test]
    fn pick_follows_declared_order() {
        let picked = projection().pick(&["name", "id"]);
        let names: Vec<_> = picked.names().collect();
        assert_eq!(names, vec!["id", "name"]);
    }

    #[test]
    fn quotey_field_name_fails() {
        let projection = ColumnProjection::new(FieldTemplate::new(vec![FieldDef::scalar(
            r#"na"me"#,
            ScalarKind::String,
        )]));
        assert_eq!(
            projection.project(&Postgres),
            Err(ConfigError::UnsafeIdentifier(r#"na"me"#.to_string()))
        );
    }

    #[test]
    fn fragment_count_matches_field_count() {
        let extended = projection().extend(vec![FieldDef::computed("two", Expr::number("1 + 1"))]);
        let fragments = extended.project(&Postgres).unwrap();
        assert_eq!(fragments.len(), extended.fields().len());
    }
}

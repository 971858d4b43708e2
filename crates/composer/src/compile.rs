use crate::{
    dialect::Dialect,
    join::{JoinKind, JoinNode},
};
use indexmap::IndexMap;
use model::{errors::ConfigError, schema::DecomposeSchema};
use std::collections::HashSet;
use tracing::debug;

/// Everything a declared join tree compiles down to: the flattened aliased
/// projection, the join-clause text, and the decomposition schema that
/// mirrors the tree. Built once, reused for every execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledJoin {
    pub projection: String,
    pub join_clause: String,
    pub schema: DecomposeSchema,
}

impl CompiledJoin {
    /// The statement skeleton; callers append WHERE and friends through
    /// `SqlWriter`.
    pub fn select(&self) -> String {
        format!("SELECT {} FROM {}", self.projection, self.join_clause)
    }
}

/// Walks the join tree depth-first and emits projection, join clause and
/// schema in one pass. Fails on the first configuration mistake, before any
/// SQL leaves this module.
pub fn compile(root: &JoinNode, dialect: &dyn Dialect) -> Result<CompiledJoin, ConfigError> {
    let mut seen = HashSet::new();
    let mut fragments = Vec::new();
    let mut join_clause = String::new();
    let schema = compile_node(root, true, dialect, &mut seen, &mut fragments, &mut join_clause)?;

    debug!(
        root = root.alias(),
        columns = fragments.len(),
        dialect = dialect.name(),
        "compiled join tree"
    );

    Ok(CompiledJoin {
        projection: fragments.join(", "),
        join_clause,
        schema,
    })
}

fn compile_node(
    node: &JoinNode,
    is_root: bool,
    dialect: &dyn Dialect,
    seen: &mut HashSet<String>,
    fragments: &mut Vec<String>,
    join_clause: &mut String,
) -> Result<DecomposeSchema, ConfigError> {
    // 1. This node's own fragments, under its own alias.
    fragments.extend(node.projection.project(dialect)?);

    // 2. Prefixed column map; every prefixed name must be unique tree-wide.
    let prefix = format!("{}_", node.alias);
    let mut columns = IndexMap::new();
    for name in node.projection.names() {
        let prefixed = format!("{prefix}{name}");
        if !seen.insert(prefixed.clone()) {
            return Err(ConfigError::ColumnCollision(prefixed));
        }
        columns.insert(prefixed, name.to_string());
    }

    // 3. Join clause piece.
    let table = node.table.render(dialect)?;
    let alias = dialect.quote_identifier(&node.alias);
    if is_root {
        join_clause.push_str(&format!("{table} AS {alias}"));
    } else {
        let keyword = match node.kind {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
        };
        join_clause.push_str(&format!(" {keyword} {table} AS {alias}"));
        if let Some(on) = &node.on {
            join_clause.push_str(&format!(" ON {on}"));
        }
    }

    // 4. Children in declaration order, depth-first.
    let mut children = IndexMap::new();
    for (name, child) in &node.children {
        let child_schema = compile_node(child, false, dialect, seen, fragments, join_clause)?;
        children.insert(name.clone(), child_schema);
    }

    Ok(DecomposeSchema {
        pk: node.pk.iter().map(|key| format!("{prefix}{key}")).collect(),
        columns,
        cardinality: node.cardinality,
        children,
    })
}

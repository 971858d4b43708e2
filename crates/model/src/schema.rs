use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Whether a join level resolves, per parent, to an ordered list of child
/// entities or to a single nullable child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    #[default]
    Many,
    One,
}

/// The recursive recipe for turning flat rows back into a nested tree.
///
/// A pure projection of a compiled join node: built once by the compiler,
/// immutable, read by every decomposition pass. `pk` and the keys of
/// `columns` are alias-prefixed names as they appear in result rows; the
/// values of `columns` are the original field names to restore. Children
/// preserve declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposeSchema {
    pub pk: Vec<String>,
    pub columns: IndexMap<String, String>,
    pub cardinality: Cardinality,
    pub children: IndexMap<String, DecomposeSchema>,
}

impl DecomposeSchema {
    pub fn child(&self, name: &str) -> Option<&DecomposeSchema> {
        self.children.get(name)
    }
}

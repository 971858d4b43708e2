use serde::{Deserialize, Serialize};

/// The declared kind of a projected column.
///
/// Field templates pair every column name with an explicit `ScalarKind`
/// instead of inferring it from a runtime default value. Computed
/// expressions are not a scalar kind; they are a field kind carrying their
/// own declared result `ScalarKind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarKind {
    Number,
    String,
    Boolean,
    Date,
    Enum,
    Json,
    Array(Box<ScalarKind>),
}

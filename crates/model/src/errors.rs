use thiserror::Error;

/// Declaration-time failures. All of these are raised before any SQL text
/// exists, so a bad join tree can never reach the database.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("join alias must not be blank")]
    BlankAlias,

    #[error("identifier {0:?} is blank or contains quote characters")]
    UnsafeIdentifier(String),

    #[error("column {0:?} is projected more than once across the join tree")]
    ColumnCollision(String),

    #[error("primary key field {field:?} is not among the projected fields of {alias:?}")]
    UnknownPrimaryKey { alias: String, field: String },

    #[error("join {0:?} declares no primary key fields")]
    EmptyPrimaryKey(String),

    #[error("child {0:?} is declared more than once under one parent")]
    DuplicateChild(String),
}

/// Read-time failures: the rows handed to the engine do not match the
/// schema they were supposedly produced for. No partial tree is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecomposeError {
    #[error("row is missing primary key column {0:?}")]
    MissingPkColumn(String),

    #[error("single-valued child {0:?} matched more than one entity under one parent")]
    AmbiguousChild(String),

    #[error("expected at most one root entity, found several")]
    AmbiguousRoot,
}

/// Raised by `Executor` implementations; the core never produces this.
#[derive(Debug, Error)]
#[error("statement execution failed: {0}")]
pub struct ExecuteError(pub String);

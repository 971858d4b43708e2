use model::core::scalar::ScalarKind;

pub mod compile;
pub mod dialect;
pub mod expr;
pub mod join;
pub mod projection;
pub mod sql;
pub mod template;

pub use compile::{CompiledJoin, compile};
pub use dialect::{Dialect, MySql, Postgres};
pub use expr::Expr;
pub use join::{JoinKind, JoinNode, JoinSpec, Table, TableRef};
pub use projection::ColumnProjection;
pub use sql::{SqlQuery, SqlWriter};
pub use template::{FieldDef, FieldKind, FieldTemplate};

pub fn field(name: &str, kind: ScalarKind) -> FieldDef {
    FieldDef::scalar(name, kind)
}

pub fn computed(name: &str, expr: Expr) -> FieldDef {
    FieldDef::computed(name, expr)
}

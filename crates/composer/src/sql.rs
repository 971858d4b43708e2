//! A small writer for splicing parameterized SQL around compiled joins.

use crate::dialect::Dialect;
use model::core::value::Value;

/// Finished statement text plus the parallel list of bound values.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlQuery {
    pub text: String,
    pub params: Vec<Value>,
}

/// Accumulates SQL text and parameters against a dialect.
///
/// `push` appends verbatim text (identifiers, clause keywords, compiled
/// projection or join-clause strings); `bind` appends the dialect's
/// placeholder and collects the value. Literal values therefore never end
/// up inside the statement text.
pub struct SqlWriter<'a> {
    sql: String,
    params: Vec<Value>,
    dialect: &'a dyn Dialect,
}

impl<'a> SqlWriter<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    pub fn push(&mut self, fragment: &str) -> &mut Self {
        self.sql.push_str(fragment);
        self
    }

    pub fn bind(&mut self, value: Value) -> &mut Self {
        self.params.push(value);
        let placeholder = self.dialect.placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
        self
    }

    /// Consumes the writer and returns the final SQL string and parameters.
    pub fn finish(self) -> SqlQuery {
        SqlQuery {
            text: self.sql,
            params: self.params,
        }
    }
}

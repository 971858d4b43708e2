//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::errors::ConfigError;

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL uses `?`
    fn placeholder(&self, index: usize) -> String;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> &'static str;
}

/// Rejects identifiers that could break out of their quoting.
///
/// Aliases, field names and table names are caller-supplied and end up
/// inside quoted identifiers, so a quote character in any of them would be
/// an injection vector. ON conditions and computed expressions are trusted
/// verbatim and are not checked here.
pub fn check_identifier(ident: &str) -> Result<(), ConfigError> {
    if ident.trim().is_empty() || ident.contains('"') || ident.contains('`') {
        return Err(ConfigError::UnsafeIdentifier(ident.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn name(&self) -> &'static str {
        "PostgreSQL"
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#"`{ident}`"#)
    }

    fn placeholder(&self, _index: usize) -> String {
        // MySQL uses ?
        "?".into()
    }

    fn name(&self) -> &'static str {
        "MySQL"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_per_dialect() {
        assert_eq!(Postgres.quote_identifier("id"), r#""id""#);
        assert_eq!(MySql.quote_identifier("id"), "`id`");
        assert_eq!(Postgres.placeholder(0), "$1");
        assert_eq!(MySql.placeholder(0), "?");
    }

    #[test]
    fn identifiers_with_quotes_are_rejected() {
        assert!(check_identifier("orders").is_ok());
        assert!(check_identifier("order_items").is_ok());
        assert_eq!(
            check_identifier(r#"a"b"#),
            Err(ConfigError::UnsafeIdentifier(r#"a"b"#.to_string()))
        );
        assert_eq!(
            check_identifier("a`b"),
            Err(ConfigError::UnsafeIdentifier("a`b".to_string()))
        );
        assert!(check_identifier("  ").is_err());
    }
}

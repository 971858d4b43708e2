use crate::{core::value::Value, errors::ExecuteError, records::row::FlatRow};
use async_trait::async_trait;

/// The statement-running collaborator.
///
/// Connection pooling, transactions and retries all live behind this trait.
/// The core never calls it: the application runs the statement it spliced
/// together and feeds the returned rows to the decomposition engine.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<Vec<FlatRow>, ExecuteError>;
}

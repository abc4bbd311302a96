// sparkify-core/src/ports/connector.rs

// What the pipeline needs from a warehouse, without knowing which one it is.
// Every statement runs in autocommit mode: once `execute` returns Ok, the
// statement is committed.

use crate::error::SparkifyError;
use async_trait::async_trait;

#[async_trait]
pub trait Connector: Send + Sync {
    /// Runs one statement and commits it.
    async fn execute(&self, query: &str) -> Result<(), SparkifyError>;

    /// Runs a query returning a single integer cell (e.g. `SELECT COUNT(*) ...`).
    async fn query_scalar(&self, query: &str) -> Result<i64, SparkifyError>;

    /// Releases the underlying session. Calling it twice is a no-op.
    async fn close(&self) -> Result<(), SparkifyError>;

    fn engine_name(&self) -> &str;
}

// sparkify-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::{Config, Connection};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::error::SparkifyError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::connector::Connector;

/// Local warehouse used for development runs and tests.
pub struct DuckDBConnector {
    conn: Mutex<Option<Connection>>,
}

impl DuckDBConnector {
    pub fn new(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)?
        } else {
            Connection::open_with_flags(db_path, config)?
        };
        debug!(path = db_path, "DuckDB connection opened");

        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<Connection>>, SparkifyError> {
        self.conn.lock().map_err(|_| {
            SparkifyError::Infrastructure(InfrastructureError::Io(std::io::Error::other(
                "DuckDB Mutex Poisoned",
            )))
        })
    }
}

fn duck_err(e: duckdb::Error) -> SparkifyError {
    SparkifyError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(e)))
}

fn closed() -> SparkifyError {
    SparkifyError::Infrastructure(InfrastructureError::Database(
        DatabaseError::ConnectionClosed,
    ))
}

#[async_trait]
impl Connector for DuckDBConnector {
    async fn execute(&self, query: &str) -> Result<(), SparkifyError> {
        let guard = self.lock()?;
        let conn = guard.as_ref().ok_or_else(closed)?;
        // Autocommit: each batch is its own transaction.
        conn.execute_batch(query).map_err(duck_err)
    }

    async fn query_scalar(&self, query: &str) -> Result<i64, SparkifyError> {
        let guard = self.lock()?;
        let conn = guard.as_ref().ok_or_else(closed)?;

        let mut stmt = conn.prepare(query).map_err(duck_err)?;
        let mut rows = stmt.query([]).map_err(duck_err)?;

        let row = rows.next().map_err(duck_err)?.ok_or_else(|| {
            SparkifyError::Infrastructure(InfrastructureError::Database(
                DatabaseError::EmptyResult(query.to_string()),
            ))
        })?;

        row.get::<_, i64>(0).map_err(duck_err)
    }

    async fn close(&self) -> Result<(), SparkifyError> {
        let mut guard = self.lock()?;
        if let Some(conn) = guard.take() {
            conn.close().map_err(|(_conn, e)| duck_err(e))?;
            debug!("DuckDB connection closed");
        }
        Ok(())
    }

    fn engine_name(&self) -> &str {
        "duckdb"
    }
}

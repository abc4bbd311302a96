// sparkify-core/src/infrastructure/adapters/redshift.rs

// Redshift speaks the Postgres wire protocol. Statements go through the simple
// query protocol (`raw_sql`): no prepared statements, which Redshift handles
// poorly for COPY and DDL, and no bind parameters since values are already
// rendered into the text.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection, Executor, Row};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::domain::project::ClusterConfig;
use crate::error::SparkifyError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::connector::Connector;

pub struct RedshiftConnector {
    conn: Mutex<Option<PgConnection>>,
}

pub fn connect_options(cluster: &ClusterConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&cluster.host)
        .port(cluster.db_port)
        .database(&cluster.db_name)
        .username(&cluster.db_user)
        .password(&cluster.db_password)
        .application_name("sparkify")
}

impl RedshiftConnector {
    #[instrument(skip(cluster), fields(host = %cluster.host, db = %cluster.db_name))]
    pub async fn connect(cluster: &ClusterConfig) -> Result<Self, InfrastructureError> {
        let conn = connect_options(cluster).connect().await?;
        info!("Connected to Redshift cluster");
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }
}

fn pg_err(e: sqlx::Error) -> SparkifyError {
    SparkifyError::Infrastructure(InfrastructureError::Database(DatabaseError::Redshift(e)))
}

fn closed() -> SparkifyError {
    SparkifyError::Infrastructure(InfrastructureError::Database(
        DatabaseError::ConnectionClosed,
    ))
}

#[async_trait]
impl Connector for RedshiftConnector {
    async fn execute(&self, query: &str) -> Result<(), SparkifyError> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(closed)?;
        // No surrounding transaction: the server commits each statement.
        let done = conn.execute(sqlx::raw_sql(query)).await.map_err(pg_err)?;
        debug!(rows = done.rows_affected(), "Statement committed");
        Ok(())
    }

    async fn query_scalar(&self, query: &str) -> Result<i64, SparkifyError> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(closed)?;
        let row = conn
            .fetch_optional(sqlx::raw_sql(query))
            .await
            .map_err(pg_err)?
            .ok_or_else(|| {
                SparkifyError::Infrastructure(InfrastructureError::Database(
                    DatabaseError::EmptyResult(query.to_string()),
                ))
            })?;
        row.try_get::<i64, _>(0).map_err(pg_err)
    }

    async fn close(&self) -> Result<(), SparkifyError> {
        let mut guard = self.conn.lock().await;
        if let Some(conn) = guard.take() {
            conn.close().await.map_err(pg_err)?;
            debug!("Redshift connection closed");
        }
        Ok(())
    }

    fn engine_name(&self) -> &str {
        "redshift"
    }
}

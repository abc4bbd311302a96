// sparkify-core/src/infrastructure/adapters/mod.rs

pub mod duckdb;
pub mod redshift;

use tracing::info;

use crate::domain::project::{DwhConfig, Engine};
use crate::error::SparkifyError;
use crate::ports::connector::Connector;

use self::duckdb::DuckDBConnector;
use self::redshift::RedshiftConnector;

/// Opens the single session a run works with.
pub async fn connect(config: &DwhConfig) -> Result<Box<dyn Connector>, SparkifyError> {
    let connector: Box<dyn Connector> = match config.engine {
        Engine::Redshift => {
            let cluster = config.cluster()?;
            Box::new(RedshiftConnector::connect(cluster).await?)
        }
        Engine::DuckDB => {
            info!(path = %config.duckdb.path, "Opening local DuckDB warehouse");
            Box::new(DuckDBConnector::new(&config.duckdb.path)?)
        }
    };
    Ok(connector)
}

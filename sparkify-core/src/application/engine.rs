// sparkify-core/src/application/engine.rs

use std::time::Instant;
use tracing::{debug, error, instrument};

use crate::error::SparkifyError;
use crate::ports::connector::Connector;

/// Runs one statement with timing. Every write of the pipeline goes through here.
#[instrument(skip(connector, query), fields(engine = connector.engine_name(), query.len = query.len()))]
pub async fn execute_query(connector: &dyn Connector, query: &str) -> Result<(), SparkifyError> {
    let start = Instant::now();
    debug!("Executing: {}", query);

    let result = connector.execute(query).await;
    let duration = start.elapsed();

    match result {
        Ok(()) => {
            debug!("Committed in {:.2?}", duration);
            Ok(())
        }
        Err(e) => {
            // Logged here for the timing, propagated unchanged.
            error!("Statement failed after {:.2?}: {}", duration, e);
            Err(e)
        }
    }
}

/// Runs a single-value count query with timing.
#[instrument(skip(connector, query), fields(engine = connector.engine_name()))]
pub async fn query_count(connector: &dyn Connector, query: &str) -> Result<i64, SparkifyError> {
    let start = Instant::now();
    debug!("Counting: {}", query);

    match connector.query_scalar(query).await {
        Ok(value) => {
            debug!(value, "Count returned in {:.2?}", start.elapsed());
            Ok(value)
        }
        Err(e) => {
            error!("Count failed after {:.2?}: {}", start.elapsed(), e);
            Err(e)
        }
    }
}

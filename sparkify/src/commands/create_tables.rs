// sparkify/src/commands/create_tables.rs
//
// USE CASE: drop and recreate the warehouse schema.

use std::path::Path;

use sparkify_core::SparkifyError;
use sparkify_core::application::reset_schema;
use sparkify_core::infrastructure::adapters::connect;
use sparkify_core::infrastructure::config::{CONFIG_FILE, load_dwh_config};

pub async fn execute() -> anyhow::Result<()> {
    // Config errors are not a run failure: they abort the process.
    let config = load_dwh_config(Path::new(CONFIG_FILE))?;

    let outcome: Result<(), SparkifyError> = async {
        let connector = connect(&config).await?;
        let result = reset_schema(connector.as_ref(), config.engine).await;
        let closed = connector.close().await;
        result.and(closed)
    }
    .await;

    super::report(&outcome);
    Ok(())
}

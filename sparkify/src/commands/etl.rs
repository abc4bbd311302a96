// sparkify/src/commands/etl.rs
//
// USE CASE: stage the raw datasets and build the star schema.

use std::path::Path;

use sparkify_core::SparkifyError;
use sparkify_core::application::run_etl;
use sparkify_core::infrastructure::adapters::connect;
use sparkify_core::infrastructure::compiler::jinja::JinjaRenderer;
use sparkify_core::infrastructure::config::{CONFIG_FILE, load_dwh_config};

pub async fn execute() -> anyhow::Result<()> {
    let config = load_dwh_config(Path::new(CONFIG_FILE))?;
    let renderer = JinjaRenderer::new();

    let start = std::time::Instant::now();
    let outcome: Result<(), SparkifyError> = async {
        let connector = connect(&config).await?;
        let result = run_etl(connector.as_ref(), &renderer, &config).await;
        let closed = connector.close().await;
        result.and(closed)
    }
    .await;
    tracing::info!("ETL finished in {:.2?}", start.elapsed());

    super::report(&outcome);
    Ok(())
}

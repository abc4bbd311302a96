// sparkify-core/src/application/loader.rs
//
// USE CASE: bulk-load the raw datasets into staging, then build the star
// schema from staging.

use tracing::info;

use crate::application::ports::TemplateEngine;
use crate::application::runner::run_sequence;
use crate::domain::project::DwhConfig;
use crate::domain::staging::{stage_context, stage_templates};
use crate::domain::statement::{Statement, StatementGroup, StatementKind};
use crate::domain::transform::insert_statements;
use crate::error::SparkifyError;
use crate::ports::connector::Connector;

/// Renders the COPY statements with the configured locations and role.
pub fn stage_statements<T: TemplateEngine + ?Sized>(
    renderer: &T,
    config: &DwhConfig,
) -> Result<Vec<Statement>, SparkifyError> {
    let context = stage_context(config)?;
    stage_templates(config.engine)
        .iter()
        .map(|t| {
            let sql = renderer.render(t.template, &context)?;
            Ok(Statement::new(StatementKind::Copy, t.name, t.target, sql))
        })
        .collect()
}

pub async fn load_staging_tables<T: TemplateEngine + ?Sized>(
    connector: &dyn Connector,
    renderer: &T,
    config: &DwhConfig,
) -> Result<usize, SparkifyError> {
    let statements = stage_statements(renderer, config)?;
    run_sequence(connector, StatementGroup::Stage, &statements).await
}

pub async fn insert_tables(connector: &dyn Connector) -> Result<usize, SparkifyError> {
    run_sequence(connector, StatementGroup::Transform, &insert_statements()).await
}

/// Stage phase then transform phase. A failed copy skips the inserts.
pub async fn run_etl<T: TemplateEngine + ?Sized>(
    connector: &dyn Connector,
    renderer: &T,
    config: &DwhConfig,
) -> Result<(), SparkifyError> {
    let staged = load_staging_tables(connector, renderer, config).await?;
    let inserted = insert_tables(connector).await?;
    info!(staged, inserted, "Load finished");
    Ok(())
}

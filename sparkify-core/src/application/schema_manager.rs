// sparkify-core/src/application/schema_manager.rs
//
// USE CASE: drop and rebuild every table. Destroys existing data.

use tracing::info;

use crate::application::runner::run_sequence;
use crate::domain::project::Engine;
use crate::domain::schema::{create_statements, drop_statements};
use crate::domain::statement::StatementGroup;
use crate::error::SparkifyError;
use crate::ports::connector::Connector;

pub async fn drop_tables(connector: &dyn Connector, engine: Engine) -> Result<usize, SparkifyError> {
    run_sequence(connector, StatementGroup::Drop, &drop_statements(engine)).await
}

pub async fn create_tables(
    connector: &dyn Connector,
    engine: Engine,
) -> Result<usize, SparkifyError> {
    run_sequence(connector, StatementGroup::Create, &create_statements(engine)).await
}

/// Drop phase then create phase. A failed drop skips the creates.
pub async fn reset_schema(connector: &dyn Connector, engine: Engine) -> Result<(), SparkifyError> {
    let dropped = drop_tables(connector, engine).await?;
    let created = create_tables(connector, engine).await?;
    info!(dropped, created, "Schema rebuilt");
    Ok(())
}

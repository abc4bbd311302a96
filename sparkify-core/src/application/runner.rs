// sparkify-core/src/application/runner.rs

// The one control loop shared by every command: run the statements of a group
// in order, each committed on its own, stop at the first failure.

use tracing::{error, info, instrument};

use crate::application::engine::{execute_query, query_count};
use crate::domain::error::DomainError;
use crate::domain::statement::{Statement, StatementGroup};
use crate::error::SparkifyError;
use crate::ports::connector::Connector;

/// Returns the number of statements executed (all of them on success).
/// Statements committed before a failure stay committed.
#[instrument(skip(connector, group, statements), fields(group = %group, total = statements.len()))]
pub async fn run_sequence(
    connector: &dyn Connector,
    group: StatementGroup,
    statements: &[Statement],
) -> Result<usize, SparkifyError> {
    let total = statements.len();

    for (index, statement) in statements.iter().enumerate() {
        info!(
            step = index + 1,
            total,
            statement = %statement.name,
            target = %statement.target,
            "Executing"
        );

        if let Err(source) = execute_query(connector, &statement.sql).await {
            error!("{}", group.failure_message());
            return Err(SparkifyError::StatementFailed {
                group,
                statement: statement.name.clone(),
                source: Box::new(source),
            });
        }
    }

    Ok(total)
}

/// Read-only counterpart of [`run_sequence`]: one count per statement, in
/// order. Anything but a SELECT is refused before it reaches the warehouse.
#[instrument(skip(connector, group, statements), fields(group = %group, total = statements.len()))]
pub async fn run_counts(
    connector: &dyn Connector,
    group: StatementGroup,
    statements: &[Statement],
) -> Result<Vec<i64>, SparkifyError> {
    let mut counts = Vec::with_capacity(statements.len());

    for statement in statements {
        let result = if statement.kind.is_read_only() {
            query_count(connector, &statement.sql).await
        } else {
            Err(DomainError::NotReadOnly(statement.name.clone()).into())
        };

        match result {
            Ok(count) => counts.push(count),
            Err(source) => {
                error!("{}", group.failure_message());
                return Err(SparkifyError::StatementFailed {
                    group,
                    statement: statement.name.clone(),
                    source: Box::new(source),
                });
            }
        }
    }

    Ok(counts)
}

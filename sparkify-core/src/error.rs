// sparkify-core/src/error.rs

use crate::domain::error::DomainError;
use crate::domain::statement::StatementGroup;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SparkifyError {
    // --- DOMAIN ERRORS (configuration rules, catalog) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (database, IO, parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- RUNNER ---
    // Raised at the statement-group boundary; `source` is the database error.
    #[error("{msg} ({statement}): {source}", msg = .group.failure_message())]
    StatementFailed {
        group: StatementGroup,
        statement: String,
        source: Box<SparkifyError>,
    },
}

impl SparkifyError {
    /// The error that actually came back from the warehouse, with the
    /// statement-group wrappers peeled off.
    pub fn root_cause(&self) -> &SparkifyError {
        match self {
            SparkifyError::StatementFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

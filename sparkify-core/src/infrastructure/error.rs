// sparkify-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(sparkify::infra::database::duckdb),
        help("An error occurred inside the local DuckDB engine.")
    )]
    DuckDB(#[from] duckdb::Error),

    #[error("Redshift Error: {0}")]
    #[diagnostic(
        code(sparkify::infra::database::redshift),
        help("Check cluster reachability, credentials and the statement text.")
    )]
    Redshift(#[from] sqlx::Error),

    #[error("Connection already closed")]
    #[diagnostic(code(sparkify::infra::database::closed))]
    ConnectionClosed,

    #[error("Query returned no rows: {0}")]
    #[diagnostic(code(sparkify::infra::database::empty))]
    EmptyResult(String),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(sparkify::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(sparkify::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration not found at '{0}'")]
    #[diagnostic(code(sparkify::infra::config_missing))]
    ConfigNotFound(String),

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(
        code(sparkify::infra::template),
        help("Check the {{ ... }} placeholders of the COPY template.")
    )]
    TemplateError(#[from] minijinja::Error),
}

// Shortcuts for `?` on driver calls
impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}

impl From<sqlx::Error> for InfrastructureError {
    fn from(err: sqlx::Error) -> Self {
        InfrastructureError::Database(DatabaseError::Redshift(err))
    }
}

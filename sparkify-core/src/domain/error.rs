// sparkify-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(sparkify::domain::config_invalid),
        help("Check the values in dwh.yaml.")
    )]
    InvalidConfiguration(String),

    #[error("Section '{section}' is required when engine is '{engine}'")]
    #[diagnostic(code(sparkify::domain::config_section))]
    MissingSection { engine: String, section: String },

    #[error("Statement '{0}' is not read-only")]
    #[diagnostic(code(sparkify::domain::not_read_only))]
    NotReadOnly(String),
}

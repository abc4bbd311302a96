// sparkify-core/src/application/mod.rs

pub mod engine;
pub mod loader;
pub mod ports;
pub mod quality;
pub mod runner;
pub mod schema_manager;

#[cfg(test)]
pub(crate) mod fixtures;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI does `use sparkify_core::application::{reset_schema, run_etl, ...};`
// without knowing the file layout.

pub use engine::execute_query;
pub use loader::run_etl;
pub use quality::{render_report, run_quality_checks};
pub use runner::{run_counts, run_sequence};
pub use schema_manager::reset_schema;

// sparkify-core/src/lib.rs

// 1. Documentation is welcome but not enforced yet
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// The warehouse contract (Connector).
pub mod ports;

// 2. Domain
// Statement catalog, table definitions, quality checks, configuration types.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// DuckDB / Redshift connectors, YAML config, Jinja rendering.
pub mod infrastructure;

// 4. Application (Use Cases)
// Schema manager, loader, quality checker, statement runner.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use sparkify_core::SparkifyError;
pub use error::SparkifyError;

// sparkify-core/src/domain/mod.rs

pub mod error;
pub mod project;
pub mod quality;
pub mod schema;
pub mod staging;
pub mod statement;
pub mod transform;

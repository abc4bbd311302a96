// sparkify-core/src/domain/project/mod.rs

pub mod configuration;
pub use configuration::{
    ClusterConfig, DuckDbConfig, DwhConfig, Engine, IamRoleConfig, StorageConfig,
};

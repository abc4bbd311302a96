// src/domain/project/configuration.rs

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Warehouse engine the pipeline runs against.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    Redshift,
    DuckDB,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Redshift => f.write_str("redshift"),
            Engine::DuckDB => f.write_str("duckdb"),
        }
    }
}

/// Contents of `dwh.yaml`.
#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct DwhConfig {
    #[serde(default)]
    pub engine: Engine,

    #[validate(nested)]
    pub cluster: Option<ClusterConfig>,

    #[validate(nested)]
    pub iam_role: Option<IamRoleConfig>,

    #[validate(nested)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub duckdb: DuckDbConfig,
}

#[derive(Deserialize, Serialize, Clone, Validate)]
pub struct ClusterConfig {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(length(min = 1))]
    pub db_name: String,
    #[validate(length(min = 1))]
    pub db_user: String,
    #[serde(default)]
    pub db_password: String,
    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub db_port: u16,
}

// Keeps the password out of logs and panics.
impl fmt::Debug for ClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterConfig")
            .field("host", &self.host)
            .field("db_name", &self.db_name)
            .field("db_user", &self.db_user)
            .field("db_password", &"***")
            .field("db_port", &self.db_port)
            .finish()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct IamRoleConfig {
    #[validate(length(min = 1))]
    pub arn: String,
}

/// Where the raw datasets live (S3 URIs for Redshift, local globs for DuckDB).
#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct StorageConfig {
    #[validate(length(min = 1))]
    pub log_data: String,
    #[validate(length(min = 1))]
    pub song_data: String,
    #[serde(default = "default_jsonpath")]
    #[validate(length(min = 1))]
    pub log_jsonpath: String,
    #[serde(default = "default_region")]
    #[validate(length(min = 1))]
    pub region: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DuckDbConfig {
    #[serde(default = "default_duckdb_path")]
    pub path: String,
}

impl Default for DuckDbConfig {
    fn default() -> Self {
        Self {
            path: default_duckdb_path(),
        }
    }
}

impl DwhConfig {
    pub fn cluster(&self) -> Result<&ClusterConfig, DomainError> {
        self.cluster
            .as_ref()
            .ok_or_else(|| self.missing_section("cluster"))
    }

    pub fn iam_role(&self) -> Result<&IamRoleConfig, DomainError> {
        self.iam_role
            .as_ref()
            .ok_or_else(|| self.missing_section("iam_role"))
    }

    /// Field-level rules plus the sections the selected engine cannot run without.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidConfiguration(e.to_string()))?;

        if self.engine == Engine::Redshift {
            self.cluster()?;
            self.iam_role()?;
        }
        Ok(())
    }

    fn missing_section(&self, section: &str) -> DomainError {
        DomainError::MissingSection {
            engine: self.engine.to_string(),
            section: section.to_string(),
        }
    }
}

fn default_port() -> u16 {
    5439
}
fn default_jsonpath() -> String {
    "auto".to_string()
}
fn default_region() -> String {
    "us-west-2".to_string()
}
fn default_duckdb_path() -> String {
    "sparkify.duckdb".to_string()
}

// sparkify-core/src/infrastructure/config/dwh.rs

use std::fs;
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::project::DwhConfig;
use crate::error::SparkifyError;
use crate::infrastructure::error::InfrastructureError;

/// Fixed name looked up in the working directory.
pub const CONFIG_FILE: &str = "dwh.yaml";

pub const ENV_DB_HOST: &str = "SPARKIFY_DB_HOST";
pub const ENV_DB_PASSWORD: &str = "SPARKIFY_DB_PASSWORD";

#[instrument]
pub fn load_dwh_config(path: &Path) -> Result<DwhConfig, SparkifyError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(path.display().to_string()).into());
    }
    info!(path = ?path, "Loading warehouse configuration");

    let content = fs::read_to_string(path).map_err(InfrastructureError::Io)?;
    let mut config = parse_dwh_config(&content)?;

    // Layering: credentials may stay out of the file.
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    config.check()?;
    Ok(config)
}

pub fn parse_dwh_config(content: &str) -> Result<DwhConfig, SparkifyError> {
    serde_yaml::from_str(content)
        .map_err(InfrastructureError::YamlError)
        .map_err(Into::into)
}

pub fn apply_env_overrides<F>(config: &mut DwhConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let Some(cluster) = config.cluster.as_mut() else {
        return;
    };
    if let Some(host) = lookup(ENV_DB_HOST) {
        info!(old = %cluster.host, new = %host, "Overriding cluster host via ENV");
        cluster.host = host;
    }
    if let Some(password) = lookup(ENV_DB_PASSWORD) {
        info!("Overriding cluster password via ENV");
        cluster.db_password = password;
    }
}

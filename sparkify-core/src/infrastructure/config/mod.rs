pub mod dwh;

pub use crate::domain::project::DwhConfig;
pub use dwh::{CONFIG_FILE, load_dwh_config};

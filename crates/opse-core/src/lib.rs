//! Framework core for opse tools: profiles, accounts, tool contract, and config.

pub mod account;
pub mod app_config;
pub mod config;
pub mod datatypes;
pub mod profile;
pub mod registry;
pub mod tool;

use thiserror::Error;

pub use account::Account;
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use datatypes::{DataTypeInput, DataTypeOutput};
pub use profile::{Profile, ProfileCollection};
pub use registry::ToolRegistry;
pub use tool::{Capabilities, Tool, ToolConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

//! Application layer errors

use thiserror::Error;

/// Search pipeline errors
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Plugin error: {0}")]
    Plugin(#[from] PluginError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Plugin registration and execution errors
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Plugin '{0}' already registered")]
    AlreadyRegistered(String),

    #[error("Plugin '{name}' failed: {reason}")]
    Failed { name: String, reason: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

//! Configuration management

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::errors::ConfigError;
use crate::domain::entities::Junction;

/// Search subsystem configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub search: SearchConfig,
    pub params: ParamsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchConfig {
    /// Junction used when a parameter does not carry a recognisable one
    pub default_junction: Junction,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParamsConfig {
    /// Extras key prefix the typed parameter lists arrive under
    pub prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                default_junction: Junction::And,
            },
            params: ParamsConfig {
                prefix: "ext_composite_".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::Parse(format!("Failed to write config: {}", e)))
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(prefix) = std::env::var("COMPOSITE_PARAM_PREFIX") {
            if !prefix.is_empty() {
                config.params.prefix = prefix;
            }
        }

        if let Ok(junction) = std::env::var("COMPOSITE_DEFAULT_JUNCTION") {
            config.search.default_junction = Junction::parse_lenient(&junction);
        }

        config
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.params.prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "params.prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

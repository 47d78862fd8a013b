//! Configuration loading from the environment and disk.

use std::fs;
use std::path::Path;

use crate::config::schema::KeepaliveConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Env var naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "KEEPALIVE_CONFIG";

/// Env var overriding the endpoint base URL.
pub const API_URL_ENV: &str = "KEEPALIVE_API_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate the configuration.
///
/// Starts from the TOML file named by `KEEPALIVE_CONFIG` if set, defaults
/// otherwise; `KEEPALIVE_API_URL` overrides the endpoint base URL either way.
pub fn load_config() -> Result<KeepaliveConfig, ConfigError> {
    let mut config = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_from_file(Path::new(&path))?,
        Err(_) => KeepaliveConfig::default(),
    };

    if let Ok(base_url) = std::env::var(API_URL_ENV) {
        if !base_url.is_empty() {
            config.endpoint.base_url = base_url;
        }
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load a configuration from a TOML file. Validation is the caller's job.
pub fn load_from_file(path: &Path) -> Result<KeepaliveConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

fn parse_config(content: &str) -> Result<KeepaliveConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_PORT: &str = "PORT";
pub const ENV_CONTROL_URL: &str = "GLUETUN_CONTROL_URL";
pub const ENV_API_KEY: &str = "GLUETUN_API_KEY";
pub const ENV_USER: &str = "GLUETUN_USER";
pub const ENV_PASSWORD: &str = "GLUETUN_PASSWORD";
pub const ENV_ASSETS_DIR: &str = "GLUETUN_WEBUI_ASSETS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: defaults, then the optional TOML file, then the
/// process environment. The result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment values onto `config`. Empty values count as unset.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(port) = get(ENV_PORT) {
        config.listener.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            key: ENV_PORT,
            value: port.clone(),
        })?;
    }
    if let Some(url) = get(ENV_CONTROL_URL) {
        config.upstream.base_url = url;
    }
    if let Some(key) = get(ENV_API_KEY) {
        config.credentials.api_key = Some(key);
    }
    if let Some(user) = get(ENV_USER) {
        config.credentials.username = Some(user);
    }
    if let Some(password) = get(ENV_PASSWORD) {
        config.credentials.password = Some(password);
    }
    if let Some(dir) = get(ENV_ASSETS_DIR) {
        config.assets.dir = dir.into();
    }

    Ok(())
}

//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All problems are
//! reported together rather than stopping at the first one.

use reqwest::header::HeaderValue;
use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream.base_url {url:?} is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("upstream.base_url must use http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("upstream.timeout_ms must be greater than zero")]
    ZeroUpstreamTimeout,

    #[error("listener.request_timeout_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("credentials.{0} contains characters not allowed in an HTTP header")]
    InvalidCredential(&'static str),

    #[error("assets.index must not be empty")]
    EmptyIndex,
}

/// Validate a loaded configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.upstream.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.upstream.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.upstream.timeout_ms == 0 {
        errors.push(ValidationError::ZeroUpstreamTimeout);
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if let Some(key) = &config.credentials.api_key {
        if HeaderValue::from_str(&format!("Bearer {}", key)).is_err() {
            errors.push(ValidationError::InvalidCredential("api_key"));
        }
    }

    if config.assets.index.trim().is_empty() {
        errors.push(ValidationError::EmptyIndex);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Outbound authentication for the control API.
//!
//! Credentials are resolved into an [`AuthConfig`] once at startup. The
//! header builder is a pure function over that value.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::config::CredentialsConfig;

/// Credential scheme attached to every upstream request.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum AuthConfig {
    #[default]
    None,
    Bearer { token: String },
    Basic { username: String, password: String },
}

impl AuthConfig {
    /// Resolve configured credentials. A token wins over a username and
    /// password; basic auth needs both halves. Empty strings count as unset.
    pub fn resolve(credentials: &CredentialsConfig) -> Self {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_owned);

        if let Some(token) = present(&credentials.api_key) {
            return AuthConfig::Bearer { token };
        }

        match (present(&credentials.username), present(&credentials.password)) {
            (Some(username), Some(password)) => AuthConfig::Basic { username, password },
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!("Only one of username/password configured, upstream auth disabled");
                AuthConfig::None
            }
            (None, None) => AuthConfig::None,
        }
    }

    /// Scheme name for logging.
    pub fn scheme(&self) -> &'static str {
        match self {
            AuthConfig::None => "none",
            AuthConfig::Bearer { .. } => "bearer",
            AuthConfig::Basic { .. } => "basic",
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::None => write!(f, "None"),
            AuthConfig::Bearer { .. } => write!(f, "Bearer(<redacted>)"),
            AuthConfig::Basic { username, .. } => write!(f, "Basic({}, <redacted>)", username),
        }
    }
}

/// Build the headers to merge into every upstream request.
pub fn build_auth_headers(auth: &AuthConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();

    let value = match auth {
        AuthConfig::None => return headers,
        AuthConfig::Bearer { token } => format!("Bearer {}", token),
        AuthConfig::Basic { username, password } => {
            format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
        }
    };

    match HeaderValue::from_str(&value) {
        Ok(mut value) => {
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Err(_) => {
            tracing::warn!(scheme = auth.scheme(), "Credential is not a valid header value, skipping");
        }
    }

    headers
}

//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::time::Duration;

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without trailing slash
    pub backend_url: String,
    /// TCP connect timeout for backend requests
    pub connect_timeout: Duration,

    // --- Session (issued by the auth provider) ---
    /// Bearer token for the signed-in user
    pub id_token: Option<String>,
    /// Backend user ID of the signed-in user
    pub user_id: Option<String>,
    /// Email of the signed-in user
    pub user_email: Option<String>,
    /// Display name of the signed-in user
    pub user_name: Option<String>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3001".to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            id_token: None,
            user_id: None,
            user_email: None,
            user_name: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let backend_url =
            env::var("ECO_BACKEND_URL").map_err(|_| ConfigError::Missing("ECO_BACKEND_URL"))?;
        let backend_url = normalize_base_url(&backend_url)?;

        let connect_timeout = match env::var("ECO_CONNECT_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid("ECO_CONNECT_TIMEOUT_SECS", raw))?,
            Err(_) => Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self {
            backend_url,
            connect_timeout,
            id_token: optional_var("ECO_ID_TOKEN"),
            user_id: optional_var("ECO_USER_ID"),
            user_email: optional_var("ECO_USER_EMAIL"),
            user_name: optional_var("ECO_USER_NAME"),
        })
    }

    /// Config pointing at a specific backend, for tests and tooling.
    pub fn with_backend(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid("ECO_BACKEND_URL", raw.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

use std::env;

use thiserror::Error;
use url::Url;

/// Environment variable naming the external backend. Required; the process
/// refuses to serve relay routes without it.
pub const BACKEND_URL_VAR: &str = "OPS_GATEWAY_BACKEND_URL";
pub const PORT_VAR: &str = "OPS_GATEWAY_PORT";
pub const TIMEOUT_VAR: &str = "OPS_GATEWAY_TIMEOUT_SECS";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process configuration, read once at startup and injected everywhere it
/// is needed.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the external console backend, without a trailing slash.
    pub backend_base_url: String,
    pub listen_port: u16,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPS_GATEWAY_BACKEND_URL is not set; refusing to start without a backend")]
    MissingBackendUrl,
    #[error("OPS_GATEWAY_BACKEND_URL is not a valid URL: {0}")]
    InvalidBackendUrl(#[from] url::ParseError),
    #[error("{0} is not a valid number: {1:?}")]
    InvalidNumber(&'static str, String),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup(BACKEND_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingBackendUrl)?;
        let parsed = Url::parse(raw_url.trim())?;
        let backend_base_url = parsed.as_str().trim_end_matches('/').to_string();

        // Allow deployments to override the port via the generic PORT too.
        let listen_port = match lookup(PORT_VAR).or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber(PORT_VAR, raw))?,
            None => DEFAULT_PORT,
        };

        let request_timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber(TIMEOUT_VAR, raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            backend_base_url,
            listen_port,
            request_timeout_secs,
        })
    }
}

//! Runtime configuration.

use std::time::Duration;

/// Environment variable naming the backend base url.
pub const API_URL_VAR: &str = "STOREFRONT_API_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_VAR: &str = "STOREFRONT_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Backend connection settings.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base url including the `/api` prefix, without a trailing slash.
    pub base_url: String,
    /// Fixed per-request timeout.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_VAR) {
            config.base_url = url.trim_end_matches('/').to_owned();
        }
        if let Ok(raw) = std::env::var(TIMEOUT_VAR) {
            match raw.parse() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(_) => tracing::warn!(value = %raw, "ignoring unparseable timeout override"),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_backend() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }
}

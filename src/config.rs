//! Client configuration.
//!
//! Built with `with_*` setters on top of [`ClientConfig::default`], or from the
//! environment with [`ClientConfig::from_env`]. Command-line flags are applied
//! on top of the environment by the binary.

use std::path::PathBuf;
use std::time::Duration;

/// Public JSONPlaceholder instance serving `/users` and `/posts`.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Overrides the directory service base URL.
pub const API_URL_ENV: &str = "ROLODEX_API_URL";
/// Enables file logging to the given path.
pub const LOG_PATH_ENV: &str = "ROLODEX_LOG";
/// Per-request timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "ROLODEX_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("base URL '{0}' must start with http:// or https://")]
    InvalidBaseUrl(String),
    #[error("ROLODEX_TIMEOUT_MS: '{0}' is not a positive number of milliseconds")]
    InvalidTimeout(String),
}

/// Configuration for the directory client.
///
/// # Example
///
/// ```ignore
/// use rolodex::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://localhost:3000")?
///     .with_request_timeout(std::time::Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root, without a trailing slash
    pub base_url: String,
    /// Per-request timeout (default: none, a stalled request stays loading)
    pub request_timeout: Option<Duration>,
    /// Log file path; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            log_path: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service base URL. Trailing slashes are trimmed.
    pub fn with_base_url(mut self, url: impl AsRef<str>) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(url.as_ref())?;
        Ok(self)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Defaults overridden by `ROLODEX_API_URL`, `ROLODEX_TIMEOUT_MS` and
    /// `ROLODEX_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = non_empty_var(API_URL_ENV) {
            config = config.with_base_url(url)?;
        }
        if let Some(raw) = non_empty_var(TIMEOUT_ENV) {
            let timeout = parse_timeout_ms(&raw).ok_or(ConfigError::InvalidTimeout(raw))?;
            config = config.with_request_timeout(timeout);
        }
        if let Some(path) = non_empty_var(LOG_PATH_ENV) {
            config = config.with_log_path(path);
        }

        Ok(config)
    }
}

/// A positive whole number of milliseconds.
pub fn parse_timeout_ms(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidBaseUrl(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_points_at_public_service() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.request_timeout.is_none());
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:3000///")
            .unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_with_base_url_rejects_other_schemes() {
        let err = ClientConfig::new()
            .with_base_url("ftp://example.com")
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://example.com".to_string()));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var(API_URL_ENV, "http://127.0.0.1:8080/");
        std::env::set_var(LOG_PATH_ENV, "/tmp/rolodex.log");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/rolodex.log")));

        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(LOG_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_timeout() {
        std::env::set_var(TIMEOUT_ENV, "2500");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_millis(2500)));

        std::env::set_var(TIMEOUT_ENV, "0");
        assert_eq!(
            ClientConfig::from_env(),
            Err(ConfigError::InvalidTimeout("0".to_string()))
        );

        std::env::remove_var(TIMEOUT_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_blank_values() {
        std::env::set_var(API_URL_ENV, "  ");
        std::env::remove_var(LOG_PATH_ENV);
        std::env::remove_var(TIMEOUT_ENV);

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config, ClientConfig::default());

        std::env::remove_var(API_URL_ENV);
    }
}

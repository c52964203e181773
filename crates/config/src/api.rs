//! Task service endpoint configuration.
//!
//! This module provides the [`ApiConfig`] type which holds the base URL of
//! the task service and the per-request timeout.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default base URL of the task service.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Default request timeout (10 seconds).
pub const DEFAULT_TIMEOUT_SECS: u32 = 10;

/// Minimum allowed request timeout (1 second).
pub const MIN_TIMEOUT_SECS: u32 = 1;

/// Maximum allowed request timeout (5 minutes).
pub const MAX_TIMEOUT_SECS: u32 = 300;

/// Configuration for reaching the task service.
///
/// # Examples
///
/// ```
/// use tarefas_config::ApiConfig;
///
/// let config = ApiConfig::default();
/// assert_eq!(config.url, "http://localhost:8080/api");
///
/// let config = ApiConfig::with_url("https://tarefas.example.com/api");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    ///
    /// Must use the `http` or `https` scheme. A trailing slash is ignored.
    #[serde(default = "default_url")]
    pub url: String,

    /// Timeout applied to each request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,
}

fn default_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u32 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Creates a configuration for the given base URL with the default timeout.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_secs))
    }

    /// Validates the endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or not `http(s)`, or if the
    /// timeout is outside the allowed range.
    pub fn validate(&self) -> crate::Result<()> {
        let url = self.url.trim();
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"));
        match rest {
            None => {
                return Err(crate::ConfigError::InvalidApiUrl {
                    url: self.url.clone(),
                    reason: "expected an http:// or https:// URL".to_string(),
                });
            }
            Some(host) if host.trim_matches('/').is_empty() => {
                return Err(crate::ConfigError::InvalidApiUrl {
                    url: self.url.clone(),
                    reason: "missing host".to_string(),
                });
            }
            Some(_) => {}
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(crate::ConfigError::InvalidValue {
                field: "api.timeout_secs",
                reason: format!(
                    "{} is outside {MIN_TIMEOUT_SECS}..={MAX_TIMEOUT_SECS} seconds",
                    self.timeout_secs
                ),
            });
        }

        Ok(())
    }
}

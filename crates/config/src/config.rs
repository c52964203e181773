//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the tarefas application.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::ApiConfig;
use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Environment variable overriding [`ApiConfig::url`].
pub const API_URL_ENV: &str = "TAREFAS_API_URL";

/// Default value of the year field in the new-task form.
pub const DEFAULT_YEAR: i32 = 2026;

/// Default lifetime of an error banner (3 seconds).
pub const DEFAULT_BANNER_SECS: u32 = 3;

/// Maximum lifetime of an error banner (1 minute).
pub const MAX_BANNER_SECS: u32 = 60;

/// The main configuration struct for the tarefas application.
///
/// # Examples
///
/// ```
/// use tarefas_config::{ApiConfig, Config};
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.default_year, 2026);
///
/// // Create a custom config
/// let config = Config {
///     api: ApiConfig::with_url("https://tarefas.example.com/api"),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Task service endpoint.
    #[serde(default)]
    pub api: ApiConfig,

    /// Value the year field is reset to after a task is created.
    #[serde(default = "default_year")]
    pub default_year: i32,

    /// How long an error banner stays visible, in seconds.
    #[serde(default = "default_banner_secs")]
    pub banner_secs: u32,
}

fn default_year() -> i32 {
    DEFAULT_YEAR
}

fn default_banner_secs() -> u32 {
    DEFAULT_BANNER_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            default_year: DEFAULT_YEAR,
            banner_secs: DEFAULT_BANNER_SECS,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./tarefas.json5` or `./tarefas.json`
    /// 2. User: `~/.config/tarefas/config.json5` or `~/.config/tarefas/config.json`
    ///
    /// If no configuration file is found, the defaults are used. Environment
    /// overrides (see [`Config::apply_env`]) are applied before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the resulting configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tarefas_config::Config;
    ///
    /// # async fn example() -> tarefas_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Talking to {}", config.api.url);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are applied as in [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tarefas_config::Config;
    ///
    /// # fn example() -> tarefas_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let mut config: Config = read_config_file(path)?;
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies environment overrides using the given variable lookup.
    ///
    /// Only [`API_URL_ENV`] is recognized; an empty value is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarefas_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_env(|key| (key == "TAREFAS_API_URL").then(|| "https://x.dev/api".to_string()));
    /// assert_eq!(config.api.url, "https://x.dev/api");
    /// ```
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.api.url = url.trim().to_string();
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarefas_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.banner_secs = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;

        if !(1..=9999).contains(&self.default_year) {
            return Err(ConfigError::InvalidValue {
                field: "default_year",
                reason: format!("{} is outside 1..=9999", self.default_year),
            });
        }

        if !(1..=MAX_BANNER_SECS).contains(&self.banner_secs) {
            return Err(ConfigError::InvalidValue {
                field: "banner_secs",
                reason: format!(
                    "{} is outside 1..={MAX_BANNER_SECS} seconds",
                    self.banner_secs
                ),
            });
        }

        Ok(())
    }

    /// Returns the banner lifetime as a [`Duration`].
    #[must_use]
    pub fn banner_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.banner_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.default_year, DEFAULT_YEAR);
        assert_eq!(config.banner_secs, DEFAULT_BANNER_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        let config = Config::new();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn banner_duration() {
        let config = Config::default();
        assert_eq!(config.banner_duration(), Duration::from_secs(3));
    }

    #[test]
    fn validate_invalid_api() {
        let config = Config {
            api: ApiConfig::with_url("localhost"),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }

    #[test]
    fn validate_invalid_year() {
        let config = Config {
            default_year: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "default_year",
                ..
            })
        ));
    }

    #[test]
    fn validate_banner_bounds() {
        let mut config = Config::default();
        config.banner_secs = MAX_BANNER_SECS;
        assert!(config.validate().is_ok());
        config.banner_secs = MAX_BANNER_SECS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn apply_env_overrides_url() {
        let mut config = Config::default();
        config.apply_env(|key| {
            assert_eq!(key, API_URL_ENV);
            Some(" https://tarefas.example.com/api ".to_string())
        });
        assert_eq!(config.api.url, "https://tarefas.example.com/api");
    }

    #[test]
    fn apply_env_ignores_missing_and_empty() {
        let mut config = Config::default();
        config.apply_env(|_| None);
        assert_eq!(config.api.url, crate::api::DEFAULT_API_URL);

        config.apply_env(|_| Some("   ".to_string()));
        assert_eq!(config.api.url, crate::api::DEFAULT_API_URL);
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let config = Config {
            api: ApiConfig::with_url("https://example.com/api"),
            default_year: 2030,
            banner_secs: 5,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                // where the service lives
                api: { url: "https://tarefas.example.com/api", timeout_secs: 20 },
                default_year: 2027,
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.timeout_secs, 20);
        assert_eq!(config.default_year, 2027);
        assert_eq!(config.banner_secs, DEFAULT_BANNER_SECS);
    }

    #[test]
    fn load_from_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"banner_secs": 0}"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            api: ApiConfig::with_url("http://127.0.0.1:9000/api"),
            default_year: 2026,
            banner_secs: 4,
        };

        original.save_to(&path).unwrap();
        let loaded: Config = read_config_file(&path).unwrap();

        assert_eq!(original, loaded);
    }
}

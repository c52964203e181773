//! Errors raised while loading, validating or saving the settings file.

use std::path::PathBuf;

/// Why a settings operation failed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("cannot read settings from {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write settings to {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings file: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    #[error("cannot encode settings: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The task service URL is unusable.
    #[error("invalid API URL {url:?}: {reason}")]
    InvalidApiUrl {
        /// The configured URL.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// A numeric setting is out of range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Dotted name of the setting.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Neither a config directory nor a home directory is known.
    #[error("no config or home directory for this user")]
    NoHomeDirectory,
}

/// Result alias for settings operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_api_url() {
        let err = ConfigError::InvalidApiUrl {
            url: "ftp://x".to_string(),
            reason: "expected an http:// or https:// URL".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"invalid API URL "ftp://x": expected an http:// or https:// URL"#
        );
    }

    #[test]
    fn error_display_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "banner_secs",
            reason: "0 is outside 1..=60 seconds".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for banner_secs: 0 is outside 1..=60 seconds"
        );
    }
}

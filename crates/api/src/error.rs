//! Error types for task service calls.
//!
//! This module defines the errors a [`TaskApi`](crate::TaskApi) call can
//! fail with and how each one is phrased for the user.

/// Banner text shown when the service could not be reached or answered
/// with something that is not JSON.
pub const CONNECTION_MESSAGE: &str = "não foi possível conectar ao servidor.";

/// Errors that can occur while talking to the task service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the response could not be read.
    #[error("request to task service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("task service answered {status}{}", format_server_message(.message.as_deref()))]
    Server {
        /// HTTP status code.
        status: u16,
        /// The `erro` field of the response body, if any.
        message: Option<String>,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service is unreachable.
    ///
    /// Produced by [`InMemoryTaskApi`](crate::InMemoryTaskApi) while it
    /// simulates an outage.
    #[error("task service unavailable")]
    Unavailable,

    /// The configured base URL cannot be used.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

fn format_server_message(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}

impl Error {
    /// Returns the text shown in the auth panel banner for this error.
    ///
    /// A server rejection shows the server's own message, or `fallback` when
    /// it sent none. Anything else means the service was unreachable.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarefas_api::Error;
    ///
    /// let err = Error::Server { status: 401, message: Some("email ou senha incorretos.".into()) };
    /// assert_eq!(err.user_message("erro ao fazer login."), "email ou senha incorretos.");
    ///
    /// let err = Error::Server { status: 500, message: None };
    /// assert_eq!(err.user_message("erro ao fazer login."), "erro ao fazer login.");
    /// ```
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Server { .. } => fallback.to_string(),
            Self::Transport(_)
            | Self::Decode(_)
            | Self::Unavailable
            | Self::InvalidBaseUrl { .. } => CONNECTION_MESSAGE.to_string(),
        }
    }
}

/// A specialized Result type for task service calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_server_with_message() {
        let err = Error::Server {
            status: 409,
            message: Some("email já cadastrado.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "task service answered 409: email já cadastrado."
        );
    }

    #[test]
    fn error_display_server_without_message() {
        let err = Error::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "task service answered 500");
    }

    #[test]
    fn user_message_empty_server_message_uses_fallback() {
        let err = Error::Server {
            status: 401,
            message: Some(String::new()),
        };
        assert_eq!(err.user_message("erro ao criar conta."), "erro ao criar conta.");
    }

    #[test]
    fn user_message_decode_is_connectivity() {
        let err = Error::from(serde_json::from_str::<u32>("nope").unwrap_err());
        assert_eq!(err.user_message("erro ao fazer login."), CONNECTION_MESSAGE);
    }

    #[test]
    fn user_message_invalid_url_is_connectivity() {
        let err = Error::InvalidBaseUrl {
            url: "x".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(err.user_message("erro ao fazer login."), CONNECTION_MESSAGE);
    }
}

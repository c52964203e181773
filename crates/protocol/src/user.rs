//! The signed-in user and the credentials used to obtain it.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Server-assigned user identifier.
pub type UserId = u32;

/// A user as returned by the login and registration endpoints.
///
/// The server also knows the user's password and active flag, but only
/// `id`, `nome` and `email` are ever sent to the client.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::User;
///
/// let user: User = serde_json::from_str(r#"{"id":1,"nome":"Ana"}"#).unwrap();
/// assert_eq!(user.id, 1);
/// assert_eq!(user.name, "Ana");
/// assert!(user.email.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier, used to scope task queries.
    pub id: UserId,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// E-mail address used to log in.
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Creates a user value.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the greeting shown in the header once signed in.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarefas_protocol::User;
    ///
    /// assert_eq!(User::new(1, "Ana", "a@b.com").greeting(), "olá, Ana");
    /// ```
    #[must_use]
    pub fn greeting(&self) -> String {
        format!("olá, {}", self.name)
    }
}

/// Validated login credentials.
///
/// The password is held as a [`SecretString`] so it never shows up in
/// `Debug` output or logs. It is only exposed when the request body is
/// built (see [`wire::LoginRequest`](crate::wire::LoginRequest)).
#[derive(Debug)]
pub struct Credentials {
    /// Trimmed e-mail address.
    pub email: String,
    /// Password, as typed.
    pub password: SecretString,
}

impl Credentials {
    /// Creates credentials from an e-mail and a password.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// A validated registration form.
#[derive(Debug)]
pub struct Registration {
    /// Trimmed display name.
    pub name: String,
    /// E-mail and password for the new account.
    pub credentials: Credentials,
}

//! Request and response bodies of the task service.
//!
//! Field names follow the service's JSON contract, which is in Portuguese
//! (`senha`, `descricao`, `idUsuario`, ...). The Rust-side names are
//! English; the mapping lives entirely in the serde attributes below.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::task::{NewTask, TaskId};
use crate::user::{Credentials, Registration, UserId};

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    /// E-mail address.
    pub email: &'a str,
    /// Password in clear text, as the service expects it.
    #[serde(rename = "senha")]
    pub password: &'a str,
}

impl<'a> LoginRequest<'a> {
    /// Builds the body from validated credentials.
    #[must_use]
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
        }
    }
}

/// Body of `POST /register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    /// Display name.
    #[serde(rename = "nome")]
    pub name: &'a str,
    /// E-mail address.
    pub email: &'a str,
    /// Password in clear text.
    #[serde(rename = "senha")]
    pub password: &'a str,
}

impl<'a> RegisterRequest<'a> {
    /// Builds the body from a validated registration form.
    #[must_use]
    pub fn new(registration: &'a Registration) -> Self {
        Self {
            name: &registration.name,
            email: &registration.credentials.email,
            password: registration.credentials.password.expose_secret(),
        }
    }
}

/// Body of `POST /tarefas`.
#[derive(Debug, Serialize)]
pub struct CreateTaskRequest<'a> {
    /// Owner of the new task.
    #[serde(rename = "idUsuario")]
    pub user_id: UserId,
    /// Task description.
    #[serde(rename = "descricao")]
    pub description: &'a str,
    /// Day of month, `0` when absent.
    #[serde(rename = "dia")]
    pub day: i32,
    /// Month, `0` when absent.
    #[serde(rename = "mes")]
    pub month: i32,
    /// Year, `0` when absent.
    #[serde(rename = "ano")]
    pub year: i32,
}

impl<'a> CreateTaskRequest<'a> {
    /// Builds the body from a validated task.
    #[must_use]
    pub fn new(task: &'a NewTask) -> Self {
        Self {
            user_id: task.user_id,
            description: &task.description,
            day: task.due.day,
            month: task.due.month,
            year: task.due.year,
        }
    }
}

/// Body of `POST /tarefas/concluir` and `POST /tarefas/deletar`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TaskRef {
    /// Task to act on.
    pub id: TaskId,
}

/// Body of `POST /tarefas/editar`.
#[derive(Debug, Serialize)]
pub struct EditTaskRequest<'a> {
    /// Task to edit.
    pub id: TaskId,
    /// Replacement description.
    #[serde(rename = "descricao")]
    pub description: &'a str,
}

/// Error body sent with a non-success status.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::wire::ErrorBody;
///
/// let body: ErrorBody = serde_json::from_str(r#"{"erro":"email já cadastrado."}"#).unwrap();
/// assert_eq!(body.message.as_deref(), Some("email já cadastrado."));
///
/// let body: ErrorBody = serde_json::from_str("{}").unwrap();
/// assert!(body.message.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    #[serde(rename = "erro", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Creates an error body with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

//! The task service contract.

use async_trait::async_trait;
use tarefas_protocol::{Credentials, NewTask, Registration, Task, TaskId, User, UserId};

use crate::error::Result;

/// How the service answered a mutation request.
///
/// Mutations are fire-and-refresh: the caller re-fetches the list whatever
/// the answer, except after a rejected create. A rejection is therefore a
/// normal outcome, not an [`Error`](crate::Error); errors are reserved for
/// requests that never got an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The service answered with a success status.
    Applied,
    /// The service answered with a non-success status.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// The `erro` field of the response body, if any.
        message: Option<String>,
    },
}

impl MutationOutcome {
    /// Returns `true` for [`MutationOutcome::Applied`].
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Operations offered by the task service.
///
/// Every method is a single round-trip. Implementations must not cache:
/// [`TaskApi::list_tasks`] always reflects the service's current state.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Server`](crate::Error::Server) for wrong credentials
    /// and a transport or decode error if no usable answer came back.
    async fn login(&self, credentials: &Credentials) -> Result<User>;

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Server`](crate::Error::Server) if the e-mail is
    /// taken and a transport or decode error if no usable answer came back.
    async fn register(&self, registration: &Registration) -> Result<User>;

    /// `GET /tarefas?idUsuario=<id>`.
    ///
    /// The list is returned as sent; soft-deleted entries are not removed.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-success status or an undecodable body.
    async fn list_tasks(&self, user_id: UserId) -> Result<Vec<Task>>;

    /// `POST /tarefas`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request got no answer.
    async fn create_task(&self, task: &NewTask) -> Result<MutationOutcome>;

    /// `POST /tarefas/concluir`: flips the completion flag.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request got no answer.
    async fn toggle_task(&self, id: TaskId) -> Result<MutationOutcome>;

    /// `POST /tarefas/editar`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request got no answer.
    async fn edit_task(&self, id: TaskId, description: &str) -> Result<MutationOutcome>;

    /// `POST /tarefas/deletar`: marks the task inactive.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request got no answer.
    async fn delete_task(&self, id: TaskId) -> Result<MutationOutcome>;
}

//! HTTP implementation of [`TaskApi`].
//!
//! This module provides [`HttpTaskApi`], which speaks the task service's
//! JSON-over-HTTP protocol using `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Serialize;
use tarefas_protocol::wire::{
    CreateTaskRequest, EditTaskRequest, ErrorBody, LoginRequest, RegisterRequest, TaskRef,
};
use tarefas_protocol::{Credentials, NewTask, Registration, Task, TaskId, User, UserId};
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::service::{MutationOutcome, TaskApi};

/// Task service client over HTTP.
///
/// Endpoint paths are appended to the base URL as is, so a base URL with a
/// path prefix (such as `http://localhost:8080/api`) keeps it.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use tarefas_api::{HttpTaskApi, TaskApi};
/// use tarefas_protocol::Credentials;
///
/// # async fn example() -> tarefas_api::Result<()> {
/// let api = HttpTaskApi::new("http://localhost:8080/api", Duration::from_secs(10))?;
/// let user = api.login(&Credentials::new("a@b.com", "1234")).await?;
/// let tasks = api.list_tasks(user.id).await?;
/// println!("{} has {} tasks", user.name, tasks.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl HttpTaskApi {
    /// Creates a client for the service at `base_url`.
    ///
    /// `timeout` applies to each request as a whole.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if `base_url` is not an absolute
    /// `http` or `https` URL, and [`Error::Transport`] if the HTTP client
    /// cannot be built.
    #[instrument(skip(timeout))]
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }

        let client = Client::builder().timeout(timeout).build()?;
        debug!(base_url = trimmed, "created task service client");

        Ok(Self {
            client,
            base_url: trimmed.to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + Sync + ?Sized,
    {
        Ok(self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?)
    }

    /// Login and registration share a response shape.
    async fn authenticate<B>(&self, path: &str, body: &B) -> Result<User>
    where
        B: Serialize + Sync + ?Sized,
    {
        let response = self.post(path, body).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&bytes);
            debug!(status = status.as_u16(), ?message, "authentication rejected");
            return Err(Error::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn mutate<B>(&self, path: &str, body: &B) -> Result<MutationOutcome>
    where
        B: Serialize + Sync + ?Sized,
    {
        let response = self.post(path, body).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(MutationOutcome::Applied);
        }

        let bytes = response.bytes().await?;
        let message = error_message(&bytes);
        debug!(path, status = status.as_u16(), ?message, "mutation rejected");
        Ok(MutationOutcome::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Extracts the `erro` field from an error body, if the body has one.
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: &Credentials) -> Result<User> {
        let user = self
            .authenticate("/login", &LoginRequest::new(credentials))
            .await?;
        debug!(user_id = user.id, "logged in");
        Ok(user)
    }

    #[instrument(skip(self, registration), fields(email = %registration.credentials.email))]
    async fn register(&self, registration: &Registration) -> Result<User> {
        let user = self
            .authenticate("/register", &RegisterRequest::new(registration))
            .await?;
        debug!(user_id = user.id, "registered");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn list_tasks(&self, user_id: UserId) -> Result<Vec<Task>> {
        let response = self
            .client
            .get(self.endpoint("/tarefas"))
            .query(&[("idUsuario", user_id)])
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(Error::Server {
                status: status.as_u16(),
                message: error_message(&bytes),
            });
        }

        let tasks: Vec<Task> = serde_json::from_slice(&bytes)?;
        debug!(count = tasks.len(), "fetched tasks");
        Ok(tasks)
    }

    #[instrument(skip(self, task), fields(user_id = task.user_id))]
    async fn create_task(&self, task: &NewTask) -> Result<MutationOutcome> {
        self.mutate("/tarefas", &CreateTaskRequest::new(task)).await
    }

    #[instrument(skip(self))]
    async fn toggle_task(&self, id: TaskId) -> Result<MutationOutcome> {
        self.mutate("/tarefas/concluir", &TaskRef { id }).await
    }

    #[instrument(skip(self, description))]
    async fn edit_task(&self, id: TaskId, description: &str) -> Result<MutationOutcome> {
        self.mutate("/tarefas/editar", &EditTaskRequest { id, description })
            .await
    }

    #[instrument(skip(self))]
    async fn delete_task(&self, id: TaskId) -> Result<MutationOutcome> {
        self.mutate("/tarefas/deletar", &TaskRef { id }).await
    }
}

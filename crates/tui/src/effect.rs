//! Remote calls requested by state updates.
//!
//! [`App::update`](crate::App::update) never talks to the network; it returns
//! an [`Effect`] instead. [`run_effect`] performs the call against a
//! [`TaskApi`] and turns the answer into outcome messages that are fed back
//! into the update loop.

use tarefas_api::{MutationOutcome, TaskApi};
use tarefas_protocol::{Credentials, Message, NewTask, Registration, TaskId, UserId};
use tracing::{info, warn};

/// Fallback shown when a login fails without a server message.
pub const LOGIN_FAILED: &str = "erro ao fazer login.";

/// Fallback shown when a registration fails without a server message.
pub const REGISTER_FAILED: &str = "erro ao criar conta.";

/// A remote call to perform.
#[derive(Debug)]
pub enum Effect {
    /// Authenticate an existing account.
    Login(Credentials),
    /// Create an account.
    Register(Registration),
    /// Fetch the task list of a user.
    LoadTasks {
        /// Owner of the tasks.
        user_id: UserId,
    },
    /// Create a task.
    CreateTask(NewTask),
    /// Flip the completion state of a task.
    ToggleTask {
        /// Task to toggle.
        id: TaskId,
    },
    /// Replace the description of a task.
    EditTask {
        /// Task to edit.
        id: TaskId,
        /// New description.
        description: String,
    },
    /// Soft-delete a task.
    DeleteTask {
        /// Task to delete.
        id: TaskId,
    },
}

/// Performs `effect` and returns the messages describing its outcome.
///
/// Failures never surface as errors here. Auth failures become
/// [`Message::AuthFailed`] with a user-facing text; every other failure is
/// logged and produces no message, leaving the state as it was.
pub async fn run_effect(api: &dyn TaskApi, effect: Effect) -> Vec<Message> {
    match effect {
        Effect::Login(credentials) => match api.login(&credentials).await {
            Ok(user) => {
                info!(user_id = user.id, "signed in");
                vec![Message::SignedIn { user }]
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                vec![Message::AuthFailed {
                    message: err.user_message(LOGIN_FAILED),
                }]
            }
        },
        Effect::Register(registration) => match api.register(&registration).await {
            Ok(user) => {
                info!(user_id = user.id, "account created");
                vec![Message::SignedIn { user }]
            }
            Err(err) => {
                warn!(error = %err, "registration failed");
                vec![Message::AuthFailed {
                    message: err.user_message(REGISTER_FAILED),
                }]
            }
        },
        Effect::LoadTasks { user_id } => match api.list_tasks(user_id).await {
            Ok(tasks) => vec![Message::TasksLoaded { tasks }],
            Err(err) => {
                warn!(error = %err, user_id, "task sync failed");
                Vec::new()
            }
        },
        Effect::CreateTask(task) => match api.create_task(&task).await {
            Ok(MutationOutcome::Applied) => vec![Message::TaskCreated],
            Ok(outcome) => {
                warn!(?outcome, "task creation rejected");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "task creation failed");
                Vec::new()
            }
        },
        Effect::ToggleTask { id } => changed(api.toggle_task(id).await, id, "toggle"),
        Effect::DeleteTask { id } => changed(api.delete_task(id).await, id, "delete"),
        Effect::EditTask { id, description } => {
            match api.edit_task(id, &description).await {
                Ok(outcome) => {
                    if !outcome.is_applied() {
                        warn!(id, ?outcome, "edit rejected");
                    }
                    vec![Message::EditFinished]
                }
                Err(err) => {
                    warn!(error = %err, id, "edit failed");
                    Vec::new()
                }
            }
        }
    }
}

/// Toggle and delete resync whenever the service answered, even with a
/// rejection.
fn changed(result: tarefas_api::Result<MutationOutcome>, id: TaskId, action: &str) -> Vec<Message> {
    match result {
        Ok(outcome) => {
            if !outcome.is_applied() {
                warn!(id, action, ?outcome, "change rejected");
            }
            vec![Message::TaskChanged]
        }
        Err(err) => {
            warn!(error = %err, id, action, "change failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarefas_api::InMemoryTaskApi;
    use tarefas_protocol::{DueDate, User, validate};

    #[tokio::test]
    async fn login_success_signs_in() {
        let api = InMemoryTaskApi::with_demo_data();
        let credentials = validate::login("a@b.com", "1234").unwrap();

        let messages = run_effect(&api, Effect::Login(credentials)).await;

        assert_eq!(
            messages,
            vec![Message::SignedIn {
                user: User::new(1, "Ana", "a@b.com")
            }]
        );
    }

    #[tokio::test]
    async fn login_failure_uses_server_message() {
        let api = InMemoryTaskApi::with_demo_data();
        let credentials = validate::login("a@b.com", "9999").unwrap();

        let messages = run_effect(&api, Effect::Login(credentials)).await;

        assert_eq!(
            messages,
            vec![Message::AuthFailed {
                message: "email ou senha incorretos.".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn outage_reports_connection_problem_on_auth() {
        let api = InMemoryTaskApi::with_demo_data();
        api.set_available(false).await;
        let registration = validate::registration("Bia", "bia@x.com", "abcd").unwrap();

        let messages = run_effect(&api, Effect::Register(registration)).await;

        assert_eq!(
            messages,
            vec![Message::AuthFailed {
                message: tarefas_api::error::CONNECTION_MESSAGE.to_string()
            }]
        );
    }

    #[tokio::test]
    async fn outage_leaves_task_list_alone() {
        let api = InMemoryTaskApi::with_demo_data();
        api.set_available(false).await;

        assert!(run_effect(&api, Effect::LoadTasks { user_id: 1 }).await.is_empty());
        assert!(run_effect(&api, Effect::ToggleTask { id: 1 }).await.is_empty());
    }

    #[tokio::test]
    async fn rejected_toggle_still_resyncs() {
        let api = InMemoryTaskApi::with_demo_data();

        let messages = run_effect(&api, Effect::ToggleTask { id: 99 }).await;

        assert_eq!(messages, vec![Message::TaskChanged]);
    }

    #[tokio::test]
    async fn create_and_edit_outcomes() {
        let api = InMemoryTaskApi::with_demo_data();
        let task = NewTask {
            user_id: 1,
            description: "ligar pro banco".to_string(),
            due: DueDate::default(),
        };

        assert_eq!(
            run_effect(&api, Effect::CreateTask(task)).await,
            vec![Message::TaskCreated]
        );
        assert_eq!(
            run_effect(
                &api,
                Effect::EditTask {
                    id: 4,
                    description: "x".to_string()
                }
            )
            .await,
            vec![Message::EditFinished]
        );
    }
}

//! In-process task service for demos and tests.
//!
//! [`InMemoryTaskApi`] answers like the real service, status codes and
//! `erro` messages included, without any network. It backs the `--demo`
//! flag of the binary and the tests of the crates above it.
//!
//! # Examples
//!
//! ```
//! use tarefas_api::{InMemoryTaskApi, TaskApi};
//! use tarefas_protocol::Credentials;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let api = InMemoryTaskApi::with_demo_data();
//! let user = api.login(&Credentials::new("A@B.com", "1234")).await.unwrap();
//! assert_eq!(user.name, "Ana");
//!
//! let tasks = api.list_tasks(user.id).await.unwrap();
//! assert!(tasks.iter().all(|task| task.active));
//! assert_eq!(api.request_log().await, ["POST /login", "GET /tarefas?idUsuario=1"]);
//! # }
//! ```

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tarefas_protocol::{
    Credentials, DueDate, NewTask, Registration, Task, TaskId, User, UserId,
};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::service::{MutationOutcome, TaskApi};

const WRONG_CREDENTIALS: &str = "email ou senha incorretos.";
const EMAIL_TAKEN: &str = "email já cadastrado.";
const TASK_NOT_FOUND: &str = "tarefa não encontrada.";
const NOT_FOUND: &str = "não encontrada.";

/// Demo account seeded by [`InMemoryTaskApi::with_demo_data`].
pub const DEMO_EMAIL: &str = "a@b.com";

/// Password of the demo account.
pub const DEMO_PASSWORD: &str = "1234";

#[derive(Debug)]
struct Account {
    user: User,
    password: String,
}

#[derive(Debug, Default)]
struct Store {
    accounts: Vec<Account>,
    tasks: Vec<Task>,
    log: Vec<String>,
    unavailable: bool,
}

impl Store {
    /// Records a request and fails it if an outage is being simulated.
    fn receive(&mut self, route: String) -> Result<()> {
        debug!(%route, "in-memory request");
        self.log.push(route);
        if self.unavailable {
            return Err(Error::Unavailable);
        }
        Ok(())
    }

    fn account_by_email(&self, email: &str) -> Option<&Account> {
        let email = email.to_lowercase();
        self.accounts
            .iter()
            .find(|account| account.user.email.to_lowercase() == email)
    }

    fn insert_user(&mut self, name: &str, email: &str, password: &str) -> User {
        let id = self.accounts.iter().map(|a| a.user.id).max().unwrap_or(0) + 1;
        let user = User::new(id, name, email);
        self.accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        user
    }

    fn insert_task(&mut self, user_id: UserId, description: &str, due: DueDate) -> TaskId {
        let id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let mut task = Task::new(id, description, due);
        task.user_id = user_id;
        self.tasks.push(task);
        id
    }

    fn active_task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id && task.active)
    }
}

fn not_found(message: &str) -> MutationOutcome {
    MutationOutcome::Rejected {
        status: 404,
        message: Some(message.to_string()),
    }
}

/// A [`TaskApi`] backed by in-process storage.
///
/// Deleted tasks stay in storage with `active == false`, like on the real
/// service, but are never listed.
#[derive(Debug, Default)]
pub struct InMemoryTaskApi {
    store: Mutex<Store>,
}

impl InMemoryTaskApi {
    /// Creates an empty service with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with the demo account (`a@b.com` / `1234`, named
    /// Ana, id 1) and a handful of tasks, one of them already deleted.
    #[must_use]
    pub fn with_demo_data() -> Self {
        let mut store = Store::default();
        let ana = store.insert_user("Ana", DEMO_EMAIL, DEMO_PASSWORD);

        store.insert_task(ana.id, "comprar leite", DueDate::default());
        let paid = store.insert_task(ana.id, "pagar conta de luz", DueDate::new(5, 3, 2026));
        store.insert_task(ana.id, "marcar dentista", DueDate::new(20, 3, 2026));
        let gone = store.insert_task(ana.id, "tarefa antiga", DueDate::default());

        for task in &mut store.tasks {
            task.done = task.id == paid;
            task.active = task.id != gone;
        }

        Self {
            store: Mutex::new(store),
        }
    }

    /// Adds an account directly, bypassing the registration checks.
    pub async fn add_user(&self, name: &str, email: &str, password: &str) -> User {
        self.store.lock().await.insert_user(name, email, password)
    }

    /// Adds an active, pending task directly and returns its id.
    pub async fn add_task(&self, user_id: UserId, description: &str, due: DueDate) -> TaskId {
        self.store
            .lock()
            .await
            .insert_task(user_id, description, due)
    }

    /// Returns every stored task, deleted ones included.
    pub async fn stored_tasks(&self) -> Vec<Task> {
        self.store.lock().await.tasks.clone()
    }

    /// Returns the routes received so far, e.g. `GET /tarefas?idUsuario=1`.
    pub async fn request_log(&self) -> Vec<String> {
        self.store.lock().await.log.clone()
    }

    /// Starts or stops simulating an outage.
    ///
    /// While unavailable, every call is still logged but fails with
    /// [`Error::Unavailable`].
    pub async fn set_available(&self, available: bool) {
        self.store.lock().await.unavailable = !available;
    }
}

#[async_trait]
impl TaskApi for InMemoryTaskApi {
    async fn login(&self, credentials: &Credentials) -> Result<User> {
        let mut store = self.store.lock().await;
        store.receive("POST /login".to_string())?;

        match store.account_by_email(&credentials.email) {
            Some(account) if account.password == credentials.password.expose_secret() => {
                Ok(account.user.clone())
            }
            _ => Err(Error::Server {
                status: 401,
                message: Some(WRONG_CREDENTIALS.to_string()),
            }),
        }
    }

    async fn register(&self, registration: &Registration) -> Result<User> {
        let mut store = self.store.lock().await;
        store.receive("POST /register".to_string())?;

        let credentials = &registration.credentials;
        if store.account_by_email(&credentials.email).is_some() {
            return Err(Error::Server {
                status: 409,
                message: Some(EMAIL_TAKEN.to_string()),
            });
        }

        Ok(store.insert_user(
            &registration.name,
            &credentials.email,
            credentials.password.expose_secret(),
        ))
    }

    async fn list_tasks(&self, user_id: UserId) -> Result<Vec<Task>> {
        let mut store = self.store.lock().await;
        store.receive(format!("GET /tarefas?idUsuario={user_id}"))?;

        Ok(store
            .tasks
            .iter()
            .filter(|task| task.active && task.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_task(&self, task: &NewTask) -> Result<MutationOutcome> {
        let mut store = self.store.lock().await;
        store.receive("POST /tarefas".to_string())?;
        store.insert_task(task.user_id, &task.description, task.due);
        Ok(MutationOutcome::Applied)
    }

    async fn toggle_task(&self, id: TaskId) -> Result<MutationOutcome> {
        let mut store = self.store.lock().await;
        store.receive("POST /tarefas/concluir".to_string())?;

        Ok(match store.active_task_mut(id) {
            Some(task) => {
                task.done = !task.done;
                MutationOutcome::Applied
            }
            None => not_found(TASK_NOT_FOUND),
        })
    }

    async fn edit_task(&self, id: TaskId, description: &str) -> Result<MutationOutcome> {
        let mut store = self.store.lock().await;
        store.receive("POST /tarefas/editar".to_string())?;

        Ok(match store.active_task_mut(id) {
            Some(task) => {
                task.description = description.to_string();
                MutationOutcome::Applied
            }
            None => not_found(NOT_FOUND),
        })
    }

    async fn delete_task(&self, id: TaskId) -> Result<MutationOutcome> {
        let mut store = self.store.lock().await;
        store.receive("POST /tarefas/deletar".to_string())?;

        Ok(match store.active_task_mut(id) {
            Some(task) => {
                task.active = false;
                MutationOutcome::Applied
            }
            None => not_found(NOT_FOUND),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarefas_protocol::validate;

    #[tokio::test]
    async fn login_is_case_insensitive_on_email() {
        let api = InMemoryTaskApi::with_demo_data();
        let user = api
            .login(&Credentials::new("A@B.COM", DEMO_PASSWORD))
            .await
            .unwrap();
        assert_eq!(user, User::new(1, "Ana", DEMO_EMAIL));
    }

    #[tokio::test]
    async fn login_with_wrong_password() {
        let api = InMemoryTaskApi::with_demo_data();
        let err = api
            .login(&Credentials::new(DEMO_EMAIL, "4321"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Server { status: 401, .. }));
        assert_eq!(err.user_message("erro ao fazer login."), WRONG_CREDENTIALS);
    }

    #[tokio::test]
    async fn register_assigns_next_id_and_rejects_duplicates() {
        let api = InMemoryTaskApi::with_demo_data();

        let bia = validate::registration("Bia", "bia@x.com", "abcd").unwrap();
        let user = api.register(&bia).await.unwrap();
        assert_eq!(user.id, 2);

        let again = validate::registration("Outra", "BIA@x.com", "abcd").unwrap();
        let err = api.register(&again).await.unwrap_err();
        assert_eq!(err.user_message("erro ao criar conta."), EMAIL_TAKEN);
    }

    #[tokio::test]
    async fn list_skips_deleted_and_foreign_tasks() {
        let api = InMemoryTaskApi::with_demo_data();
        let other = api.add_user("Caio", "caio@x.com", "9999").await;
        api.add_task(other.id, "do caio", DueDate::default()).await;

        let tasks = api.list_tasks(1).await.unwrap();
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| t.active && t.user_id == 1));
        assert_eq!(api.stored_tasks().await.len(), 5);
    }

    #[tokio::test]
    async fn toggle_flips_and_reports_missing() {
        let api = InMemoryTaskApi::with_demo_data();

        assert!(api.toggle_task(1).await.unwrap().is_applied());
        assert!(api.stored_tasks().await[0].done);
        assert!(api.toggle_task(1).await.unwrap().is_applied());
        assert!(!api.stored_tasks().await[0].done);

        assert_eq!(
            api.toggle_task(99).await.unwrap(),
            not_found(TASK_NOT_FOUND)
        );
    }

    #[tokio::test]
    async fn deleted_task_cannot_be_edited() {
        let api = InMemoryTaskApi::with_demo_data();

        assert!(api.delete_task(2).await.unwrap().is_applied());
        assert_eq!(api.edit_task(2, "x").await.unwrap(), not_found(NOT_FOUND));
        assert_eq!(api.delete_task(2).await.unwrap(), not_found(NOT_FOUND));
    }

    #[tokio::test]
    async fn outage_fails_every_call_but_logs_it() {
        let api = InMemoryTaskApi::with_demo_data();
        api.set_available(false).await;

        assert!(matches!(api.list_tasks(1).await, Err(Error::Unavailable)));
        assert!(matches!(api.toggle_task(1).await, Err(Error::Unavailable)));
        assert_eq!(
            api.request_log().await,
            vec!["GET /tarefas?idUsuario=1", "POST /tarefas/concluir"]
        );

        api.set_available(true).await;
        assert!(api.list_tasks(1).await.is_ok());
    }
}

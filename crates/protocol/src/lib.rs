//! Shared protocol types for the tarefas application.
//!
//! This crate defines the core types used across all tarefas components,
//! including users, tasks, list filters, UI messages and the JSON bodies
//! exchanged with the task service.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`user`]: The signed-in user and login/registration credentials
//! - [`task`]: Task identifiers, due dates and the `Task` struct
//! - [`filter`]: List filters and summary counts
//! - [`validate`]: Local form validation performed before any request
//! - [`format`]: Display helpers for task text
//! - [`message`]: TUI event messages
//! - [`wire`]: Request and response bodies of the remote API
//! - [`error`]: Validation error type
//!
//! # Examples
//!
//! Filtering a task list and computing its summary:
//!
//! ```
//! use tarefas_protocol::{DueDate, Filter, Summary, Task};
//!
//! let mut done = Task::new(1, "pagar conta", DueDate::default());
//! done.done = true;
//! let tasks = vec![done, Task::new(2, "comprar leite", DueDate::new(5, 3, 2026))];
//!
//! let pending = tarefas_protocol::visible(&tasks, Filter::Pending);
//! assert_eq!(pending.len(), 1);
//! assert_eq!(pending[0].due.label().as_deref(), Some("05/03/2026"));
//!
//! let summary = Summary::of(&tasks);
//! assert_eq!((summary.total, summary.pending, summary.completed), (2, 1, 1));
//! ```

pub mod error;
pub mod filter;
pub mod format;
pub mod message;
pub mod task;
pub mod user;
pub mod validate;
pub mod wire;

// Re-export primary types at crate root for convenience
pub use error::{Result, ValidationError};
pub use filter::{Filter, Summary, visible};
pub use message::Message;
pub use task::{DueDate, NewTask, Task, TaskId, retain_active};
pub use user::{Credentials, Registration, User, UserId};

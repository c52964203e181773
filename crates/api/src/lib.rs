//! Task service client for the tarefas application.
//!
//! This crate defines the [`TaskApi`] contract of the remote task service
//! and two implementations of it:
//!
//! - [`HttpTaskApi`]: the real service over HTTP, built on `reqwest`
//! - [`InMemoryTaskApi`]: an in-process stand-in for demos and tests
//!
//! # Endpoints
//!
//! | Method | Request | Answer |
//! |--------|---------|--------|
//! | [`login`](TaskApi::login) | `POST /login` | user, or `{erro}` |
//! | [`register`](TaskApi::register) | `POST /register` | user, or `{erro}` |
//! | [`list_tasks`](TaskApi::list_tasks) | `GET /tarefas?idUsuario=<id>` | task array |
//! | [`create_task`](TaskApi::create_task) | `POST /tarefas` | created task |
//! | [`toggle_task`](TaskApi::toggle_task) | `POST /tarefas/concluir` | `{ok}` or `{erro}` |
//! | [`edit_task`](TaskApi::edit_task) | `POST /tarefas/editar` | `{ok}` or `{erro}` |
//! | [`delete_task`](TaskApi::delete_task) | `POST /tarefas/deletar` | `{ok}` or `{erro}` |

pub mod client;
pub mod error;
pub mod memory;
pub mod service;

pub use client::HttpTaskApi;
pub use error::{Error, Result};
pub use memory::InMemoryTaskApi;
pub use service::{MutationOutcome, TaskApi};

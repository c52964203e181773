//! Terminal UI for the tarefas application.
//!
//! This crate provides a Ratatui-based terminal client for the task
//! service: login and registration, then a filtered task list with a
//! new-task form, completion toggling, editing and deletion.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct, update logic and run loop
//! - [`state`]: Application state and its transitions
//! - [`effect`]: Remote calls requested by updates, and their outcomes
//! - [`event`]: Event handling and key mappings
//! - [`input`]: Single-line text fields
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use tarefas_api::HttpTaskApi;
//! use tarefas_config::Config;
//! use tarefas_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load().await?;
//!     let api = HttpTaskApi::new(&config.api.url, config.api.timeout())?;
//!
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(config);
//!     let result = app.run(&mut terminal, &api).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod effect;
pub mod event;
pub mod input;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use effect::Effect;
pub use event::InputMode;
pub use state::{AppState, Focus, Screen};

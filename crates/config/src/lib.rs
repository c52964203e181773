//! Configuration management for the tarefas client.
//!
//! This crate loads, validates and persists the client configuration: where
//! the task service lives, how long to wait for it, and a couple of UI
//! defaults.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`api`]: Task service URL and request timeout
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment variable `TAREFAS_API_URL` (overrides `api.url`)
//! 2. Local config (`./tarefas.json5` or `./tarefas.json`)
//! 3. User config (`~/.config/tarefas/config.json5` or `~/.config/tarefas/config.json`)
//! 4. Built-in defaults
//!
//! ```json5
//! {
//!   api: { url: "http://localhost:8080/api", timeout_secs: 10 },
//!   default_year: 2026,
//!   banner_secs: 3,
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use tarefas_config::Config;
//!
//! # async fn example() -> tarefas_config::Result<()> {
//! let config = Config::load().await?;
//! println!("API at {} (timeout {:?})", config.api.url, config.api.timeout());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod persistence;

pub use api::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, Result};

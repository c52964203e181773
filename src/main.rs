//! tarefas - A terminal client for a personal task-tracking service.
//!
//! This is the main binary that launches the TUI application.
//!
//! ```text
//! tarefas [--demo] [CONFIG]
//! ```
//!
//! `CONFIG` loads a specific configuration file instead of searching the
//! usual locations. `--demo` talks to an in-process service seeded with the
//! account `a@b.com` / `1234` instead of the configured API.

mod logging;

use std::path::PathBuf;

use anyhow::{Context, bail};
use tarefas_api::{HttpTaskApi, InMemoryTaskApi, TaskApi};
use tarefas_config::Config;
use tarefas_tui::{App, terminal};
use tracing::info;

/// Command-line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    demo: bool,
    config: Option<PathBuf>,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        for arg in args {
            match arg.as_str() {
                "--demo" => parsed.demo = true,
                flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
                path => {
                    if parsed.config.is_some() {
                        bail!("unexpected argument: {path}");
                    }
                    parsed.config = Some(PathBuf::from(path));
                }
            }
        }
        Ok(parsed)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::load().await.context("failed to load configuration")?,
    };

    if let Some(path) = logging::init_or_warn() {
        info!(log = %path.display(), "logging initialized");
    }

    let api: Box<dyn TaskApi> = if args.demo {
        info!("using in-memory demo service");
        Box::new(InMemoryTaskApi::with_demo_data())
    } else {
        info!(url = %config.api.url, "using task service");
        Box::new(HttpTaskApi::new(&config.api.url, config.api.timeout())?)
    };

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal, api.as_ref()).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

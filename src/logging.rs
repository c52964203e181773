//! Log file setup.
//!
//! The terminal is in raw mode while the app runs, so logs go to a file
//! instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "TAREFAS_LOG";

const DEFAULT_FILTER: &str = "info";

/// Returns `<state dir>/tarefas/tarefas.log`, falling back to the cache
/// directory on platforms without a state directory.
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("tarefas").join("tarefas.log"))
}

/// Builds the filter from the directives in `value`, or `info` when unset
/// or unparsable.
fn filter_from(value: Option<&str>) -> EnvFilter {
    value
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))
}

/// Like [`init`], but a failure only disables logging. The reason is
/// printed to stderr, since the terminal is not in raw mode yet.
pub fn init_or_warn() -> Option<PathBuf> {
    without_logging_on_error(init())
}

fn without_logging_on_error(result: anyhow::Result<Option<PathBuf>>) -> Option<PathBuf> {
    result.unwrap_or_else(|err| {
        eprintln!("tarefas: logging disabled: {err:#}");
        None
    })
}

/// Installs the global subscriber, appending to the log file.
///
/// Returns the log file path, or `None` if no suitable directory exists,
/// in which case nothing is logged.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init() -> anyhow::Result<Option<PathBuf>> {
    let Some(path) = log_file_path() else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    let directives = std::env::var(LOG_ENV).ok();
    fmt()
        .with_env_filter(filter_from(directives.as_deref()))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

    Ok(Some(path))
}

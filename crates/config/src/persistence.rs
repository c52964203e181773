//! Config file discovery, reading and writing.
//!
//! Files may be JSON5 (comments, trailing commas) or plain JSON. Discovery
//! checks the working directory before the user config directory:
//!
//! 1. `./tarefas.json5`, `./tarefas.json`
//! 2. `~/.config/tarefas/config.json5`, `~/.config/tarefas/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["tarefas.json5", "tarefas.json"];

/// Directory under the platform config dir.
const USER_CONFIG_DIR: &str = "tarefas";

/// File names inside [`USER_CONFIG_DIR`], in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file to load, if any.
///
/// ```no_run
/// use tarefas_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Same as [`find_config_file`] with explicit base directories.
///
/// `local_dir` stands for the working directory and `config_dir` for the
/// platform config directory (`None` when there is no home directory).
#[must_use]
pub fn find_config_file_in(local_dir: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = config_dir
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.is_file())
}

/// Returns `~/.config/tarefas/` (or the platform equivalent).
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config
/// directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the path a fresh user config would be written to.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Reads and parses a JSON5 or JSON configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not parse into `T`.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json5::from_str(&content)?)
}

/// Writes `config` as pretty-printed JSON, creating parent directories.
///
/// serde_json5 cannot serialize, so saved files are always plain JSON.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written, or if
/// serialization fails.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        url: String,
        secs: u32,
    }

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "{}").unwrap();
    }

    #[test]
    fn find_prefers_local_json5() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        touch(&local.path().join("tarefas.json"));
        touch(&local.path().join("tarefas.json5"));
        touch(&user.path().join("tarefas/config.json5"));

        let found = find_config_file_in(local.path(), Some(user.path())).unwrap();
        assert!(found.ends_with("tarefas.json5"));
        assert!(found.starts_with(local.path()));
    }

    #[test]
    fn find_falls_back_to_user_dir() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        touch(&user.path().join("tarefas/config.json"));

        let found = find_config_file_in(local.path(), Some(user.path())).unwrap();
        assert_eq!(found, user.path().join("tarefas").join("config.json"));
    }

    #[test]
    fn find_without_any_file() {
        let local = TempDir::new().unwrap();
        assert!(find_config_file_in(local.path(), None).is_none());
    }

    #[test]
    fn find_ignores_directories() {
        let local = TempDir::new().unwrap();
        std::fs::create_dir(local.path().join("tarefas.json5")).unwrap();
        assert!(find_config_file_in(local.path(), None).is_none());
    }

    #[test]
    fn read_json5_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tarefas.json5");
        std::fs::write(
            &path,
            r#"
            {
                // local server
                url: "http://localhost:8080/api",
                secs: 5,
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(sample.secs, 5);
    }

    #[test]
    fn read_missing_file() {
        let result: Result<Sample> = read_config_file("/nonexistent/tarefas.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn read_invalid_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tarefas.json");
        std::fs::write(&path, "not json").unwrap();

        let result: Result<Sample> = read_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
    }

    #[test]
    fn write_creates_parents_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("config.json");
        let sample = Sample {
            url: "https://x.dev/api".to_string(),
            secs: 9,
        };

        write_config_file(&path, &sample).unwrap();
        assert_eq!(read_config_file::<Sample>(&path).unwrap(), sample);
    }

    #[test]
    fn default_user_path_is_json5() {
        if dirs::config_dir().is_some() {
            let path = default_user_config_path().unwrap();
            assert!(path.ends_with("tarefas/config.json5"));
        }
    }
}

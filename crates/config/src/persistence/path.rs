//! Path helpers for the shortcuts file location.
//!
//! Responsibilities:
//! - Resolve the configuration directory, honouring `KEYSCOPE_CONFIG_DIR`.
//! - Use `directories` crate for platform-appropriate paths otherwise.
//!
//! Does NOT handle:
//! - Reading or writing the shortcuts file.

use std::path::PathBuf;

use crate::constants::{APP_NAME, CONFIG_DIR_ENV, SHORTCUTS_FILE_NAME};

use super::PersistenceError;

/// Returns the configuration directory without touching the filesystem.
///
/// - `KEYSCOPE_CONFIG_DIR` when set and non-empty
/// - Linux: `~/.config/keyscope`
/// - macOS: `~/Library/Application Support/keyscope`
/// - Windows: `%AppData%\keyscope\config`
pub fn resolve_config_dir() -> Result<PathBuf, PersistenceError> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        PersistenceError::ConfigDirUnavailable("no home directory found".to_string())
    })?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

/// Returns the configuration directory, creating it if absent.
pub fn config_dir() -> Result<PathBuf, PersistenceError> {
    let dir = resolve_config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|source| PersistenceError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Returns the path of the shortcuts file inside the configuration directory.
pub fn shortcuts_path() -> Result<PathBuf, PersistenceError> {
    Ok(config_dir()?.join(SHORTCUTS_FILE_NAME))
}

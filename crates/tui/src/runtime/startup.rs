//! Locating and loading the shortcuts file at startup.
//!
//! Responsibilities:
//! - Resolve the shortcuts file from `--config-dir` or the config directory.
//! - Build the default registry and merge the saved bindings into it.
//! - Decide per command what an unreadable file means.
//!
//! Does NOT handle:
//! - The merge rules themselves (see `keyscope_config::persistence`).
//!
//! Invariants:
//! - A load error is reported once, as the returned warning or error.
//! - Mutating commands never run on top of a file that failed to load.
//! - The editor never overwrites an unreadable file without backing it up.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use keyscope_config::constants::SHORTCUTS_FILE_NAME;
use keyscope_config::{PersistenceError, Registry, ShortcutStore};

use crate::cli::Command;

/// What to do when the shortcuts file cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailurePolicy {
    /// Fail the command.
    Abort,
    /// Warn and continue with defaults without touching the file.
    ContinueWithDefaults,
    /// Move an unreadable file aside, then continue with defaults.
    BackupAndContinue,
}

impl LoadFailurePolicy {
    pub fn for_command(command: &Command) -> Self {
        if command.is_mutating() {
            Self::Abort
        } else if command.is_interactive() {
            Self::BackupAndContinue
        } else {
            Self::ContinueWithDefaults
        }
    }
}

/// The loaded registry plus anything the user should be told about.
#[derive(Debug)]
pub struct Startup {
    pub registry: Registry,
    pub warning: Option<String>,
}

/// Shortcuts file inside `config_dir`, or in the resolved config directory.
pub fn resolve_store(config_dir: Option<&Path>) -> Result<ShortcutStore> {
    match config_dir {
        Some(dir) => Ok(ShortcutStore::new(dir.join(SHORTCUTS_FILE_NAME))),
        None => ShortcutStore::from_config_dir().context("Failed to resolve config directory"),
    }
}

/// Builds the default registry and merges the saved bindings into it.
pub fn load_registry(store: &ShortcutStore, policy: LoadFailurePolicy) -> Result<Startup> {
    let mut registry = Registry::initialize();
    let err = match store.load_into(&mut registry) {
        Ok(report) => {
            tracing::debug!(?report, "Startup load complete");
            return Ok(Startup {
                registry,
                warning: None,
            });
        }
        Err(err) => err,
    };

    // A failed load leaves the registry at its defaults
    tracing::warn!(error = %err, ?policy, "Failed to load shortcuts");
    let warning = match policy {
        LoadFailurePolicy::Abort => {
            return Err(err).context("Refusing to modify shortcuts until the file loads");
        }
        LoadFailurePolicy::ContinueWithDefaults => format!("{err}; showing defaults"),
        LoadFailurePolicy::BackupAndContinue => backup_message(store, err)?,
    };

    Ok(Startup {
        registry,
        warning: Some(warning),
    })
}

fn backup_message(store: &ShortcutStore, err: PersistenceError) -> Result<String> {
    if !err.is_corrupt_file() {
        return Ok(format!("{err}; using defaults"));
    }
    match store.backup_corrupt() {
        Ok(backup) => Ok(format!(
            "{err}; moved to {} and using defaults",
            backup.display()
        )),
        Err(backup_err) => Err(anyhow!(
            "{err}; backup to a sibling file also failed: {backup_err}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(content: &str) -> (tempfile::TempDir, ShortcutStore) {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ShortcutStore::new(temp_dir.path().join(SHORTCUTS_FILE_NAME));
        std::fs::write(store.path(), content).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_policy_per_command() {
        assert_eq!(
            LoadFailurePolicy::for_command(&Command::List),
            LoadFailurePolicy::ContinueWithDefaults
        );
        assert_eq!(
            LoadFailurePolicy::for_command(&Command::Edit),
            LoadFailurePolicy::BackupAndContinue
        );
        assert_eq!(
            LoadFailurePolicy::for_command(&Command::Reset {
                identifier: None,
                scope: "global".to_string(),
                all: true,
            }),
            LoadFailurePolicy::Abort
        );
    }

    #[test]
    fn test_resolve_store_with_explicit_dir() {
        let store = resolve_store(Some(Path::new("conf/keyscope"))).unwrap();
        assert_eq!(store.path(), Path::new("conf/keyscope/shortcuts.json"));
    }

    #[test]
    fn test_abort_on_corrupt_file() {
        let (_dir, store) = store_with("not json");
        let err = load_registry(&store, LoadFailurePolicy::Abort).unwrap_err();
        assert!(err.to_string().contains("Refusing to modify shortcuts"));
        assert!(store.path().exists());
    }

    #[test]
    fn test_continue_keeps_file() {
        let (_dir, store) = store_with("not json");
        let startup = load_registry(&store, LoadFailurePolicy::ContinueWithDefaults).unwrap();
        assert_eq!(startup.registry, Registry::initialize());
        assert!(startup.warning.unwrap().contains("showing defaults"));
        assert!(store.path().exists());
    }

    #[test]
    fn test_backup_moves_file_aside() {
        let (dir, store) = store_with("not json");
        let startup = load_registry(&store, LoadFailurePolicy::BackupAndContinue).unwrap();
        assert_eq!(startup.registry, Registry::initialize());
        assert!(startup.warning.unwrap().contains("moved to"));
        assert!(!store.path().exists());

        let backups = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn test_clean_load_has_no_warning() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ShortcutStore::new(temp_dir.path().join(SHORTCUTS_FILE_NAME));
        let startup = load_registry(&store, LoadFailurePolicy::Abort).unwrap();
        assert!(startup.warning.is_none());
    }
}

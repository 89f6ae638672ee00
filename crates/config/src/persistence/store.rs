//! Loading and saving the shortcuts file.
//!
//! Responsibilities:
//! - Merge saved bindings into a defaulted `Registry` (merge-on-load).
//! - Write the whole registry back atomically (temp file + rename).
//! - Back up unreadable files before they are overwritten.
//!
//! Does NOT handle:
//! - Choosing the file location (see `path`).
//! - Deciding when to save (the capture controller saves after every change).
//!
//! Invariants:
//! - A missing or blank file is "no saved data", never an error.
//! - A failed load leaves the registry exactly as it was.
//! - Records for unknown shortcuts are skipped; records for unknown scopes fail the load.
//! - Loading the same file twice yields the same registry as loading it once.

use std::path::{Path, PathBuf};

use crate::registry::Registry;

use super::{PersistedRecord, PersistenceError};

/// How a load call found the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No file on disk; defaults apply.
    #[default]
    Missing,
    /// The file exists but holds no data.
    Empty,
    Loaded,
}

/// Summary of a merge-on-load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub status: LoadStatus,
    /// Records merged into a shortcut.
    pub applied: usize,
    /// Records with no matching shortcut.
    pub skipped: usize,
}

/// Sink for registry snapshots.
///
/// The capture controller persists through this trait so hosts and tests can
/// substitute their own storage.
pub trait Persist {
    fn persist(&self, registry: &Registry) -> Result<(), PersistenceError>;
}

impl<P: Persist + ?Sized> Persist for &P {
    fn persist(&self, registry: &Registry) -> Result<(), PersistenceError> {
        (**self).persist(registry)
    }
}

/// The shortcuts file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutStore {
    path: PathBuf,
}

impl ShortcutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `shortcuts.json` in the resolved configuration directory.
    pub fn from_config_dir() -> Result<Self, PersistenceError> {
        Ok(Self::new(super::shortcuts_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_into(&self, registry: &mut Registry) -> Result<LoadReport, PersistenceError> {
        load_shortcuts(&self.path, registry)
    }

    pub fn save(&self, registry: &Registry) -> Result<(), PersistenceError> {
        save_shortcuts(&self.path, registry)
    }

    /// Renames the current file to `shortcuts.corrupt.<unix-seconds>`.
    ///
    /// Returns the backup path. The original path no longer exists afterwards.
    pub fn backup_corrupt(&self) -> Result<PathBuf, std::io::Error> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let backup_path = self.path.with_extension(format!("corrupt.{}", timestamp));
        std::fs::rename(&self.path, &backup_path)?;

        tracing::warn!(
            path = %self.path.display(),
            backup = %backup_path.display(),
            "Backed up unreadable shortcuts file"
        );
        Ok(backup_path)
    }
}

impl Persist for ShortcutStore {
    fn persist(&self, registry: &Registry) -> Result<(), PersistenceError> {
        self.save(registry)
    }
}

/// Merges the bindings saved at `path` into `registry`.
pub fn load_shortcuts(path: &Path, registry: &mut Registry) -> Result<LoadReport, PersistenceError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No shortcuts file, using defaults");
            return Ok(LoadReport::default());
        }
        Err(source) => {
            return Err(PersistenceError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        tracing::debug!(path = %path.display(), "Shortcuts file is empty, using defaults");
        return Ok(LoadReport {
            status: LoadStatus::Empty,
            ..LoadReport::default()
        });
    }

    let records: Vec<PersistedRecord> =
        serde_json::from_str(&content).map_err(|source| PersistenceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    // Validate everything before touching the registry
    if let Some(record) = records
        .iter()
        .find(|r| registry.scopes().resolve(&r.scope_identifier).is_none())
    {
        return Err(PersistenceError::UnknownScope {
            path: path.to_path_buf(),
            identifier: record.identifier.clone(),
            scope: record.scope_identifier.clone(),
        });
    }

    let mut report = LoadReport {
        status: LoadStatus::Loaded,
        ..LoadReport::default()
    };
    for record in &records {
        match registry.find_by_identifier_and_scope_mut(&record.identifier, &record.scope_identifier)
        {
            Some(shortcut) => {
                shortcut.set_event(record.event());
                report.applied += 1;
            }
            None => {
                tracing::debug!(
                    identifier = %record.identifier,
                    scope = %record.scope_identifier,
                    "Skipping saved shortcut with no matching definition"
                );
                report.skipped += 1;
            }
        }
    }

    tracing::info!(
        path = %path.display(),
        applied = report.applied,
        skipped = report.skipped,
        "Shortcuts loaded"
    );
    Ok(report)
}

/// Writes every shortcut of `registry`, in row order, to `path`.
pub fn save_shortcuts(path: &Path, registry: &Registry) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| PersistenceError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let records: Vec<PersistedRecord> = registry
        .shortcuts()
        .iter()
        .map(PersistedRecord::from_shortcut)
        .collect();
    let content = serde_json::to_string_pretty(&records).map_err(PersistenceError::Serialize)?;

    // Write to a temporary file first
    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content).map_err(|source| PersistenceError::Write {
        path: temp_path.clone(),
        source,
    })?;

    // Atomically rename the temporary file to the target path
    if let Err(source) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::debug!(
        path = %path.display(),
        shortcuts = records.len(),
        "Shortcuts saved atomically"
    );
    Ok(())
}

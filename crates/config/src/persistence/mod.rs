//! Shortcut persistence.
//!
//! Responsibilities:
//! - Define the on-disk record format (`PersistedRecord`).
//! - Load saved bindings into a registry and save the registry back.
//! - Resolve the configuration directory and shortcuts file path.
//!
//! Does NOT handle:
//! - Building the registry or its defaults (see `registry` and `defaults`).
//! - Interactive editing (see the TUI crate).
//!
//! Invariants:
//! - Saves are atomic: content is written to a temp file, then renamed.
//! - Save failures are always returned to the caller, never swallowed.

mod error;
mod path;
mod record;
mod store;

pub use error::PersistenceError;
pub use path::{config_dir, resolve_config_dir, shortcuts_path};
pub use record::PersistedRecord;
pub use store::{LoadReport, LoadStatus, Persist, ShortcutStore, load_shortcuts, save_shortcuts};

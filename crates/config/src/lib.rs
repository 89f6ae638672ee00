//! Shortcut configuration for keyscope.
//!
//! This crate owns the key model, the scope and shortcut tables, the
//! registry built from them, and the JSON persistence of user bindings.
//! It has no terminal dependencies; the TUI crate converts terminal
//! events into [`types::KeyEvent`] values before they reach this crate.

pub mod constants;
pub mod defaults;
pub mod keybind;
pub mod persistence;
pub mod registry;
pub mod types;

pub use keybind::{KeyParseError, parse_key};
pub use persistence::{
    LoadReport, LoadStatus, Persist, PersistedRecord, PersistenceError, ShortcutStore,
};
pub use registry::Registry;
pub use types::{
    GLOBAL_SCOPE, Key, KeyEvent, Modifiers, RawKeyEvent, Scope, ScopeTable, Shortcut,
    ShortcutDefault, render_binding,
};

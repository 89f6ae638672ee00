//! On-disk record format.
//!
//! The record stores only the scope identifier, not the scope
//! itself; scopes are resolved against the registry's table at load time.
//!
//! Invariants:
//! - Field names are PascalCase (`Identifier`, `ScopeIdentifier`, `EventKey`,
//!   `EventRune`, `EventMod`) and must not change.
//! - A cleared binding is written as zeros in all three event fields.
//! - `Label` is written for human readers and ignored when reading.

use serde::{Deserialize, Serialize};

use crate::types::{KeyEvent, RawKeyEvent, Shortcut};

/// One shortcut binding as stored in the shortcuts file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersistedRecord {
    pub identifier: String,
    pub scope_identifier: String,
    #[serde(default)]
    pub event_key: u16,
    /// Unicode code point, 0 if none.
    #[serde(default)]
    pub event_rune: i32,
    #[serde(default)]
    pub event_mod: u16,
    #[serde(default, skip_deserializing, skip_serializing_if = "String::is_empty")]
    pub label: String,
}

impl PersistedRecord {
    pub fn from_shortcut(shortcut: &Shortcut) -> Self {
        let raw = shortcut.event().map(KeyEvent::to_raw).unwrap_or_default();
        Self {
            identifier: shortcut.identifier().to_string(),
            scope_identifier: shortcut.scope().to_string(),
            event_key: raw.key,
            event_rune: raw.rune,
            event_mod: raw.modifiers,
            label: shortcut.binding_label(),
        }
    }

    /// Reconstructs the binding; `None` for a cleared shortcut.
    pub fn event(&self) -> Option<KeyEvent> {
        KeyEvent::from_raw(RawKeyEvent {
            key: self.event_key,
            rune: self.event_rune,
            modifiers: self.event_mod,
        })
    }
}

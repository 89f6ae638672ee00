//! The ordered collection of all shortcuts.
//!
//! Responsibilities:
//! - Build the canonical shortcut list from the default tables.
//! - Look shortcuts up by `(identifier, scope)` for merge-on-load.
//! - Resolve an incoming key event against a scope and its parents.
//!
//! Does NOT handle:
//! - Reading or writing the shortcuts file (see `persistence`).
//! - Interactive rebinding (see the capture controller in the TUI crate).
//!
//! Invariants:
//! - Registries are plain values; there is no process-wide instance.
//! - `(identifier, scope)` pairs are unique; duplicates in a table are dropped.
//! - Row order follows the default table and never changes after construction.

use crate::defaults::{DEFAULT_SCOPES, DEFAULT_SHORTCUTS};
use crate::types::{KeyEvent, Scope, ScopeTable, Shortcut, ShortcutDefault};

/// All shortcuts known to the application, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    scopes: ScopeTable,
    shortcuts: Vec<Shortcut>,
}

impl Registry {
    /// Builds a registry from the built-in scope and shortcut tables.
    pub fn initialize() -> Self {
        Self::from_tables(DEFAULT_SCOPES, DEFAULT_SHORTCUTS)
    }

    /// Builds a registry from arbitrary tables.
    pub fn from_tables(scopes: &[Scope], defaults: &[ShortcutDefault]) -> Self {
        let scopes = ScopeTable::new(scopes.iter().copied());
        let mut shortcuts: Vec<Shortcut> = Vec::with_capacity(defaults.len());

        for default in defaults {
            let duplicate = shortcuts
                .iter()
                .any(|s| s.identifier() == default.identifier && s.scope() == default.scope);
            if duplicate {
                tracing::warn!(
                    identifier = default.identifier,
                    scope = default.scope,
                    "Duplicate shortcut definition, keeping first"
                );
                continue;
            }
            if scopes.resolve(default.scope).is_none() {
                tracing::warn!(
                    identifier = default.identifier,
                    scope = default.scope,
                    "Shortcut references undefined scope"
                );
            }
            shortcuts.push(Shortcut::from(default));
        }

        Self { scopes, shortcuts }
    }

    pub fn scopes(&self) -> &ScopeTable {
        &self.scopes
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    /// Shortcut at a display row.
    pub fn get(&self, row: usize) -> Option<&Shortcut> {
        self.shortcuts.get(row)
    }

    pub fn get_mut(&mut self, row: usize) -> Option<&mut Shortcut> {
        self.shortcuts.get_mut(row)
    }

    /// Row of the shortcut with the given identifier in the given scope.
    pub fn position(&self, identifier: &str, scope: &str) -> Option<usize> {
        self.shortcuts
            .iter()
            .position(|s| s.identifier() == identifier && s.scope() == scope)
    }

    pub fn find_by_identifier_and_scope(&self, identifier: &str, scope: &str) -> Option<&Shortcut> {
        self.position(identifier, scope)
            .and_then(|row| self.shortcuts.get(row))
    }

    pub fn find_by_identifier_and_scope_mut(
        &mut self,
        identifier: &str,
        scope: &str,
    ) -> Option<&mut Shortcut> {
        self.position(identifier, scope)
            .and_then(|row| self.shortcuts.get_mut(row))
    }

    /// Restores the default binding of the shortcut at `row`.
    ///
    /// Returns the binding that was replaced, or `None` if the row does not exist.
    pub fn reset_to_default(&mut self, row: usize) -> Option<Option<KeyEvent>> {
        self.shortcuts.get_mut(row).map(Shortcut::reset_to_default)
    }

    pub fn reset_all(&mut self) {
        for shortcut in &mut self.shortcuts {
            shortcut.reset_to_default();
        }
    }

    /// Current bindings in row order.
    pub fn snapshot(&self) -> Vec<Option<KeyEvent>> {
        self.shortcuts.iter().map(|s| s.event().copied()).collect()
    }

    /// Finds the shortcut an event triggers in `scope`, falling back to parent scopes.
    ///
    /// Within one scope the first matching row wins; shortcuts sharing a key are
    /// not treated as an error.
    pub fn lookup(&self, scope: &str, event: &KeyEvent) -> Option<&Shortcut> {
        self.scopes.ancestors(scope).find_map(|scope| {
            self.shortcuts
                .iter()
                .find(|s| s.scope() == scope.identifier && s.is_triggered_by(event))
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::initialize()
    }
}

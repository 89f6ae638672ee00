//! Shortcut scopes.
//!
//! Responsibilities:
//! - Define `Scope`, a named context a shortcut belongs to.
//! - Provide `ScopeTable` for resolving scope identifiers and walking parents.
//!
//! Does NOT handle:
//! - Shortcut storage or lookup (see `registry`).
//!
//! Invariants:
//! - Scope identifiers are persisted and must never be renamed.
//! - Identifiers are unique within a table; the first definition wins.
//! - Parents are referenced by identifier, never owned.

/// Identifier of the root scope every other scope descends from.
pub const GLOBAL_SCOPE: &str = "global";

/// A named context node, optionally parented to another scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    /// Stable identifier written to the shortcuts file.
    pub identifier: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Identifier of the parent scope, `None` for the root.
    pub parent: Option<&'static str>,
}

/// Lookup table of all scopes known to a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
}

impl ScopeTable {
    /// Builds a table, dropping any scope whose identifier was already defined.
    pub fn new(scopes: impl IntoIterator<Item = Scope>) -> Self {
        let mut table: Vec<Scope> = Vec::new();
        for scope in scopes {
            if table.iter().any(|s| s.identifier == scope.identifier) {
                tracing::warn!(
                    scope = scope.identifier,
                    "Duplicate scope identifier, keeping first definition"
                );
                continue;
            }
            table.push(scope);
        }
        Self { scopes: table }
    }

    /// Resolves a scope identifier.
    pub fn resolve(&self, identifier: &str) -> Option<&Scope> {
        self.scopes.iter().find(|s| s.identifier == identifier)
    }

    /// Iterates the scope itself followed by its parents, innermost first.
    ///
    /// Unknown identifiers yield nothing. Parent cycles are cut after every
    /// scope has been visited once.
    pub fn ancestors<'a>(
        &'a self,
        identifier: &str,
    ) -> impl Iterator<Item = &'a Scope> + use<'a> {
        let mut next = self.resolve(identifier);
        let mut remaining = self.scopes.len();
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            let current = next?;
            next = current.parent.and_then(|p| self.resolve(p));
            Some(current)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

//! User-assignable shortcuts.
//!
//! Responsibilities:
//! - Define `Shortcut`, a named action bound to an optional key event.
//! - Define `ShortcutDefault`, the literal row type of the built-in default table.
//!
//! Does NOT handle:
//! - Ordering or lookup across shortcuts (see `registry`).
//! - Persistence (see `persistence`).
//!
//! Invariants:
//! - `(identifier, scope)` pairs are unique across a registry.
//! - The default event is fixed at construction; only `event` changes.
//! - A shortcut references its scope by identifier and never owns it.

use super::key::{KeyEvent, render_binding};

/// One row of the built-in default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutDefault {
    pub identifier: &'static str,
    pub name: &'static str,
    pub scope: &'static str,
    pub event: KeyEvent,
}

/// An identified, user-visible binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    identifier: String,
    name: String,
    scope: String,
    event: Option<KeyEvent>,
    default_event: KeyEvent,
}

impl Shortcut {
    /// Creates a shortcut bound to its default event.
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        scope: impl Into<String>,
        default_event: KeyEvent,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            scope: scope.into(),
            event: Some(default_event),
            default_event,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the owning scope.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The current binding; `None` means the shortcut triggers nothing.
    pub fn event(&self) -> Option<&KeyEvent> {
        self.event.as_ref()
    }

    pub fn default_event(&self) -> &KeyEvent {
        &self.default_event
    }

    /// Replaces the binding, returning the previous one.
    pub fn set_event(&mut self, event: Option<KeyEvent>) -> Option<KeyEvent> {
        std::mem::replace(&mut self.event, event)
    }

    pub fn bind(&mut self, event: KeyEvent) -> Option<KeyEvent> {
        self.set_event(Some(event))
    }

    pub fn clear(&mut self) -> Option<KeyEvent> {
        self.set_event(None)
    }

    /// Restores the compiled-in binding. The default itself is copied, never shared.
    pub fn reset_to_default(&mut self) -> Option<KeyEvent> {
        self.set_event(Some(self.default_event))
    }

    pub fn is_default(&self) -> bool {
        self.event == Some(self.default_event)
    }

    /// True if the current binding matches `event`.
    pub fn is_triggered_by(&self, event: &KeyEvent) -> bool {
        self.event.is_some_and(|bound| bound.matches(event))
    }

    /// Human-readable label of the current binding, empty when unbound.
    pub fn binding_label(&self) -> String {
        render_binding(self.event.as_ref())
    }
}

impl From<&ShortcutDefault> for Shortcut {
    fn from(default: &ShortcutDefault) -> Self {
        Self::new(default.identifier, default.name, default.scope, default.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::key::{Key, Modifiers};

    fn shortcut() -> Shortcut {
        Shortcut::new(
            "toggle_user_container",
            "Toggle user container",
            "global",
            KeyEvent::char('U', Modifiers::ALT),
        )
    }

    #[test]
    fn test_new_starts_at_default() {
        let s = shortcut();
        assert!(s.is_default());
        assert_eq!(s.binding_label(), "Alt+Shift+U");
    }

    #[test]
    fn test_clear_and_reset() {
        let mut s = shortcut();
        let previous = s.clear();
        assert_eq!(previous, Some(KeyEvent::char('U', Modifiers::ALT)));
        assert_eq!(s.event(), None);
        assert_eq!(s.binding_label(), "");

        s.reset_to_default();
        assert!(s.is_default());
        s.reset_to_default();
        assert!(s.is_default());
    }

    #[test]
    fn test_rebinding_does_not_touch_default() {
        let mut s = shortcut();
        s.bind(KeyEvent::char('k', Modifiers::CTRL));
        assert!(!s.is_default());
        assert_eq!(s.default_event(), &KeyEvent::char('U', Modifiers::ALT));
    }

    #[test]
    fn test_is_triggered_by() {
        let mut s = shortcut();
        assert!(s.is_triggered_by(&KeyEvent::char('U', Modifiers::ALT | Modifiers::SHIFT)));
        s.clear();
        assert!(!s.is_triggered_by(&KeyEvent::char('U', Modifiers::ALT)));
        s.bind(KeyEvent::new(Key::F(2), Modifiers::empty()));
        assert!(s.is_triggered_by(&KeyEvent::new(Key::F(2), Modifiers::empty())));
    }
}

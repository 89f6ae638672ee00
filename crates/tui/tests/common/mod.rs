//! Test helpers for TUI testing.
//!
//! Provides crossterm key events as a terminal would deliver them, plus
//! stores for exercising the save paths.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keyscope_config::{Persist, PersistenceError, Registry};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create an Alt+char key event.
pub fn alt_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a Shift+Tab key event as crossterm reports it.
pub fn back_tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
}

/// Converts a crossterm event the way the event loop does.
pub fn convert(event: KeyEvent) -> keyscope_config::KeyEvent {
    keyscope_tui::to_key_event(&event).expect("press events always convert")
}

/// Store whose saves always fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub attempts: Cell<usize>,
}

impl Persist for FailingStore {
    fn persist(&self, _registry: &Registry) -> Result<(), PersistenceError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(PersistenceError::ConfigDirUnavailable(
            "disk unavailable".to_string(),
        ))
    }
}

/// Store that keeps every saved snapshot in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub saved: RefCell<Vec<Registry>>,
}

impl Persist for MemoryStore {
    fn persist(&self, registry: &Registry) -> Result<(), PersistenceError> {
        self.saved.borrow_mut().push(registry.clone());
        Ok(())
    }
}

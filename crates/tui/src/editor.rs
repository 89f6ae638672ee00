//! Interactive shortcut editor state.
//!
//! Responsibilities:
//! - Route key events to the focused control (shortcut table or Close button).
//! - Apply table navigation for keys the capture controller passes through.
//! - Keep the status line in sync with the last outcome or error.
//!
//! Does NOT handle:
//! - Drawing (see `ui`).
//! - Terminal setup and the event loop (see `main.rs`).
//!
//! Invariants:
//! - Esc closes the editor only when no capture is in progress.
//! - Save errors never end the session; they are shown in the status line.

use std::cell::RefCell;
use std::rc::Rc;

use keyscope_config::{Key, KeyEvent, Modifiers, Persist, Registry};
use ratatui::widgets::TableState;

use crate::capture::{CaptureController, CaptureOutcome};
use crate::focus::FocusRing;

pub const SHORTCUTS_ID: &str = "shortcuts";
pub const CLOSE_ID: &str = "close";

/// Rows moved by PageUp / PageDown.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            message: message.into(),
        }
    }
}

pub struct Editor<P: Persist> {
    controller: CaptureController<P>,
    focus: Rc<RefCell<FocusRing>>,
    pub(crate) table_state: TableState,
    status: Option<Status>,
    should_quit: bool,
}

impl<P: Persist> Editor<P> {
    pub fn new(registry: Registry, store: P) -> Self {
        let focus = Rc::new(RefCell::new(FocusRing::new(&[SHORTCUTS_ID, CLOSE_ID])));
        let mut controller = CaptureController::new(registry, store);

        let ring = Rc::clone(&focus);
        controller.set_on_focus_next(move || ring.borrow_mut().next());
        let ring = Rc::clone(&focus);
        controller.set_on_focus_previous(move || ring.borrow_mut().prev());

        let mut table_state = TableState::default();
        if !controller.registry().is_empty() {
            table_state.select(Some(0));
        }

        Self {
            controller,
            focus,
            table_state,
            status: None,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &CaptureController<P> {
        &self.controller
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Shows a message until the next key changes it.
    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focus.borrow().is_focused(id)
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        let on_close = self.is_focused(CLOSE_ID);
        if on_close {
            self.handle_close_key(event);
            return;
        }

        match self.controller.handle_key(event) {
            Ok(CaptureOutcome::PassThrough) => self.navigate(event),
            Ok(outcome) => self.status = self.describe(outcome),
            Err(e) => {
                tracing::error!(error = %e, "Shortcut change failed");
                self.status = Some(Status::error(e.to_string()));
            }
        }
    }

    fn handle_close_key(&mut self, event: KeyEvent) {
        match event.key {
            Key::Enter | Key::Esc => self.should_quit = true,
            Key::Tab if !event.modifiers.contains(Modifiers::SHIFT) => {
                self.focus.borrow_mut().next()
            }
            Key::Tab | Key::BackTab => self.focus.borrow_mut().prev(),
            _ => {}
        }
    }

    fn navigate(&mut self, event: KeyEvent) {
        let last = self.controller.registry().len().saturating_sub(1);
        let selected = self.controller.selected();
        let target = match event.key {
            Key::Up => selected.saturating_sub(1),
            Key::Down => (selected + 1).min(last),
            Key::PageUp => selected.saturating_sub(PAGE_SIZE),
            Key::PageDown => (selected + PAGE_SIZE).min(last),
            Key::Home => 0,
            Key::End => last,
            Key::Esc => {
                self.should_quit = true;
                return;
            }
            _ => return,
        };
        self.controller.select(target);
        self.table_state.select(Some(self.controller.selected()));
    }

    fn describe(&self, outcome: CaptureOutcome) -> Option<Status> {
        let name = |row: usize| {
            self.controller
                .registry()
                .get(row)
                .map(|s| s.name().to_string())
                .unwrap_or_default()
        };
        let label = |row: usize| {
            self.controller
                .registry()
                .get(row)
                .map(|s| s.binding_label())
                .unwrap_or_default()
        };

        match outcome {
            CaptureOutcome::Armed { row } => Some(Status::info(format!(
                "Press the new key for '{}'",
                name(row)
            ))),
            CaptureOutcome::Bound { row, .. } => Some(Status::info(format!(
                "'{}' bound to {}",
                name(row),
                label(row)
            ))),
            CaptureOutcome::Cleared { row } => {
                Some(Status::info(format!("'{}' cleared", name(row))))
            }
            CaptureOutcome::Reset { row } => Some(Status::info(format!(
                "'{}' reset to {}",
                name(row),
                label(row)
            ))),
            CaptureOutcome::FocusNext
            | CaptureOutcome::FocusPrevious
            | CaptureOutcome::PassThrough => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use keyscope_config::PersistenceError;

    use super::*;

    struct NullStore;

    impl Persist for NullStore {
        fn persist(&self, _registry: &Registry) -> Result<(), PersistenceError> {
            Ok(())
        }
    }

    fn editor() -> Editor<NullStore> {
        Editor::new(Registry::initialize(), NullStore)
    }

    fn key(key: Key) -> KeyEvent {
        KeyEvent::new(key, Modifiers::empty())
    }

    #[test]
    fn test_navigation_moves_selection() {
        let mut e = editor();
        e.handle_key(key(Key::Down));
        e.handle_key(key(Key::Down));
        e.handle_key(key(Key::Up));
        assert_eq!(e.controller().selected(), 1);
        assert_eq!(e.table_state.selected(), Some(1));

        e.handle_key(key(Key::End));
        assert_eq!(
            e.controller().selected(),
            e.controller().registry().len() - 1
        );
        e.handle_key(key(Key::PageDown));
        assert_eq!(
            e.controller().selected(),
            e.controller().registry().len() - 1
        );
        e.handle_key(key(Key::Home));
        assert_eq!(e.controller().selected(), 0);
    }

    #[test]
    fn test_esc_closes_only_when_idle() {
        let mut e = editor();
        e.handle_key(key(Key::Enter));
        e.handle_key(key(Key::Esc));
        assert!(!e.should_quit());
        assert_eq!(
            e.controller().registry().get(0).unwrap().event(),
            Some(&key(Key::Esc))
        );

        e.handle_key(key(Key::Esc));
        assert!(e.should_quit());
    }

    #[test]
    fn test_tab_reaches_close_button() {
        let mut e = editor();
        e.handle_key(key(Key::Tab));
        assert!(e.is_focused(CLOSE_ID));

        e.handle_key(key(Key::Down));
        assert_eq!(e.controller().selected(), 0);

        e.handle_key(key(Key::BackTab));
        assert!(e.is_focused(SHORTCUTS_ID));

        e.handle_key(key(Key::Tab));
        e.handle_key(key(Key::Enter));
        assert!(e.should_quit());
    }

    #[test]
    fn test_status_follows_outcomes() {
        let mut e = editor();
        e.handle_key(key(Key::Enter));
        assert_eq!(
            e.status().unwrap().message,
            "Press the new key for 'Focus the next widget above'"
        );

        e.handle_key(KeyEvent::char('k', Modifiers::CTRL));
        assert_eq!(
            e.status().unwrap().message,
            "'Focus the next widget above' bound to Ctrl+K"
        );

        e.handle_key(key(Key::Backspace));
        assert_eq!(
            e.status().unwrap().message,
            "'Focus the next widget above' cleared"
        );
    }
}

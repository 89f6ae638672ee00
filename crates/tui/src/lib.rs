//! Keyscope TUI Library
//!
//! This library provides the interactive side of keyscope: converting
//! crossterm events, the capture state machine that rebinds shortcuts,
//! the editor built around it, and the command-line surface.
//!
//! # Example
//!
//! ```rust
//! use keyscope_config::{Key, KeyEvent, Modifiers, Persist, PersistenceError, Registry};
//! use keyscope_tui::capture::{CaptureController, CaptureOutcome};
//!
//! struct NoSave;
//!
//! impl Persist for NoSave {
//!     fn persist(&self, _registry: &Registry) -> Result<(), PersistenceError> {
//!         Ok(())
//!     }
//! }
//!
//! let mut controller = CaptureController::new(Registry::initialize(), NoSave);
//! controller.handle_key(KeyEvent::new(Key::Enter, Modifiers::empty())).unwrap();
//! let outcome = controller
//!     .handle_key(KeyEvent::char('k', Modifiers::CTRL))
//!     .unwrap();
//! assert!(matches!(outcome, CaptureOutcome::Bound { row: 0, .. }));
//! ```

pub mod capture;
pub mod cli;
pub mod editor;
pub mod focus;
pub mod input;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use capture::{CaptureController, CaptureError, CaptureOutcome, CaptureState, ShortcutRow};
pub use editor::Editor;
pub use focus::FocusRing;
pub use input::to_key_event;

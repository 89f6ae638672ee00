//! Interactive rebinding of shortcuts.
//!
//! Responsibilities:
//! - Run the capture state machine over a row-oriented shortcut list.
//! - Persist after every binding change, rolling back when the save fails.
//! - Hand Tab / Shift+Tab focus requests to the host.
//! - Expose a per-row view model for rendering.
//!
//! Does NOT handle:
//! - Converting terminal events (see `input`).
//! - Table navigation; navigation keys are passed through untouched.
//! - Drawing (see `ui`).
//!
//! Invariants:
//! - The machine starts `Idle` and returns to `Idle` after every capture.
//! - While capturing, every key is consumed as the new binding.
//! - Replacing the shortcut list cancels any capture in progress.
//! - A failed save leaves both the registry and the file as they were.

mod controller;
mod error;
mod rows;

pub use controller::{CaptureController, CaptureOutcome, CaptureState, FocusCallback};
pub use error::CaptureError;
pub use rows::ShortcutRow;

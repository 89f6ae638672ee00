//! Errors surfaced by the capture controller.

use keyscope_config::{KeyEvent, PersistenceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    /// Saving failed; the in-memory change was rolled back.
    #[error("Failed to save shortcut on row {row}: {source}")]
    Persist {
        row: usize,
        /// The binding that could not be saved; `None` for a clear.
        attempted: Option<KeyEvent>,
        #[source]
        source: PersistenceError,
    },

    #[error("No shortcut at row {0}")]
    NoSuchRow(usize),
}

//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on exit, even during panics.
//! - Leave raw mode and the alternate screen via the Drop trait.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must be created after terminal setup is complete.
//! - Must live for the duration of the editor session.
//! - Drop implementation must not panic.

use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that restores the terminal when dropped.
#[derive(Debug, Default)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: this runs during unwinding too. The explicit
        // cleanup in main() runs first on a normal exit.
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

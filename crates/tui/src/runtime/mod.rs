//! Runtime components for the keyscope binary.
//!
//! This module contains the runtime infrastructure:
//! - Terminal management (TerminalGuard)
//! - Logging bootstrap
//! - Startup: locating and loading the shortcuts file
//! - Non-interactive subcommands
//!
//! Does NOT handle:
//! - Key handling or rendering of the editor (see `editor` and `ui`).
//! - The file format itself (see `keyscope_config::persistence`).

pub mod commands;
pub mod logging;
pub mod startup;
pub mod terminal;

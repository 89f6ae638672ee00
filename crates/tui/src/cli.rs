//! Command-line argument parsing for keyscope.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Loading or saving shortcuts (see `keyscope_config::persistence`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - Running without a subcommand is the same as `list`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use keyscope_config::GLOBAL_SCOPE;
use keyscope_config::constants::CONFIG_DIR_ENV;

/// Command-line arguments for keyscope.
///
/// Shortcuts file location (highest to lowest):
/// 1. `--config-dir`
/// 2. `KEYSCOPE_CONFIG_DIR`
/// 3. Platform configuration directory
#[derive(Debug, Parser)]
#[command(
    name = "keyscope",
    about = "View and rebind scoped keyboard shortcuts",
    version,
    after_help = "Examples:\n  keyscope\n  keyscope edit\n  keyscope bind toggle_user_container Ctrl+K\n  keyscope clear quote_selected_message --scope chatview\n  keyscope reset --all\n"
)]
pub struct Cli {
    /// Directory holding shortcuts.json
    #[arg(long, global = true, env = CONFIG_DIR_ENV)]
    pub config_dir: Option<PathBuf>,

    /// Write logs to daily-rotated files in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every shortcut with its current binding
    List,

    /// Print the path of the shortcuts file
    Path,

    /// Bind a shortcut to a key, e.g. `Ctrl+Alt+C`
    Bind {
        identifier: String,
        keys: String,
        #[arg(long, default_value = GLOBAL_SCOPE)]
        scope: String,
    },

    /// Remove the binding of a shortcut
    Clear {
        identifier: String,
        #[arg(long, default_value = GLOBAL_SCOPE)]
        scope: String,
    },

    /// Restore default bindings
    Reset {
        /// Shortcut to reset
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        identifier: Option<String>,
        #[arg(long, default_value = GLOBAL_SCOPE)]
        scope: String,
        /// Reset every shortcut
        #[arg(long)]
        all: bool,
    },

    /// Open the interactive editor
    Edit,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List)
    }
}

impl Command {
    /// True for commands that open the terminal UI.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Edit)
    }

    /// True for commands that write the shortcuts file.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Bind { .. } | Self::Clear { .. } | Self::Reset { .. }
        )
    }
}

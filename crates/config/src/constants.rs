//! Centralized constants for the keyscope workspace.
//!
//! File names and environment variable names shared by the config and TUI
//! crates live here so both sides agree on them.

// =============================================================================
// Configuration Location
// =============================================================================

/// Application name used for platform configuration directories.
pub const APP_NAME: &str = "keyscope";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "KEYSCOPE_CONFIG_DIR";

/// Name of the shortcuts file inside the configuration directory.
pub const SHORTCUTS_FILE_NAME: &str = "shortcuts.json";

// =============================================================================
// Logging
// =============================================================================

/// Prefix of the daily-rotated log files.
pub const LOG_FILE_NAME: &str = "keyscope.log";

//! View model for one table row.

/// Display data for one shortcut row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutRow {
    /// Display name of the owning scope.
    pub scope: String,
    pub name: String,
    /// Rendered binding; empty when cleared.
    pub binding: String,
    /// True while this row is waiting for the key to capture.
    pub awaiting_input: bool,
    pub is_default: bool,
}

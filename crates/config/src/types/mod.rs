//! Keybinding type definitions for keyscope.
//!
//! Responsibilities:
//! - Define key events, modifiers and their canonical rendering.
//! - Define scopes and the shortcut entity.
//!
//! Does NOT handle:
//! - Key string parsing (see `keybind` module at crate root).
//! - Ordering, lookup and defaults (see `registry` and `defaults`).
//! - Reading or writing the shortcuts file (see `persistence`).

mod key;
mod scope;
mod shortcut;

pub use key::{Key, KeyEvent, MAX_FUNCTION_KEY, Modifiers, RawKeyEvent, render_binding};
pub use scope::{GLOBAL_SCOPE, Scope, ScopeTable};
pub use shortcut::{Shortcut, ShortcutDefault};

//! Key string parsing.
//!
//! Responsibilities:
//! - Parse human-readable key strings (`Ctrl+Alt+C`, `Shift+Tab`, `F1`) into `KeyEvent`s.
//! - Accept every label produced by `KeyEvent`'s `Display` impl.
//!
//! Does NOT handle:
//! - Integration with crossterm (that's in the TUI crate).
//! - Conflict detection between shortcuts; two shortcuts may share a key.

use thiserror::Error;

use crate::types::{Key, KeyEvent, MAX_FUNCTION_KEY, Modifiers};

/// Errors that can occur when parsing a key string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    /// Invalid key syntax
    #[error("Invalid key syntax: '{key}'. Expected format like 'q', 'Ctrl+x', 'Shift+Tab', 'F1'")]
    InvalidSyntax {
        /// The invalid key string
        key: String,
    },

    /// Unknown key name
    #[error("Unknown key name: '{name}'")]
    UnknownKey {
        /// The unknown key name
        name: String,
    },
}

/// Parse a key string like "Ctrl+x", "F1", "Shift+Tab" into a key event.
///
/// Letters are case-insensitive unless Shift is given: `Ctrl+K` and `ctrl+k`
/// both mean the `k` key with Ctrl, while `Alt+Shift+U` yields an uppercase
/// `U`, matching how such events are rendered.
///
/// # Examples
///
/// ```
/// use keyscope_config::keybind::parse_key;
/// use keyscope_config::types::{Key, KeyEvent, Modifiers};
///
/// let event = parse_key("Ctrl+x").unwrap();
/// assert_eq!(event, KeyEvent::char('x', Modifiers::CTRL));
///
/// let event = parse_key("F1").unwrap();
/// assert_eq!(event.key, Key::F(1));
/// ```
pub fn parse_key(key_str: &str) -> Result<KeyEvent, KeyParseError> {
    let key_str = key_str.trim();
    let invalid = || KeyParseError::InvalidSyntax {
        key: key_str.to_string(),
    };

    if key_str.is_empty() {
        return Err(invalid());
    }

    // A trailing "++" or a lone "+" names the plus key itself
    let (modifier_part, key_name) = if key_str == "+" {
        ("", "+")
    } else if let Some(rest) = key_str.strip_suffix("++") {
        (rest, "+")
    } else {
        match key_str.rsplit_once('+') {
            Some((mods, key)) => (mods, key.trim()),
            None => ("", key_str),
        }
    };

    if key_name.is_empty() || parse_modifier(key_name).is_some() {
        return Err(invalid());
    }

    let mut modifiers = Modifiers::empty();
    if !modifier_part.is_empty() {
        for part in modifier_part.split('+') {
            modifiers |= parse_modifier(part.trim()).ok_or_else(invalid)?;
        }
    }

    let event = parse_key_code(key_name)?;
    Ok(apply_modifiers(event, modifiers))
}

fn parse_modifier(token: &str) -> Option<Modifiers> {
    match token.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifiers::CTRL),
        "shift" => Some(Modifiers::SHIFT),
        "alt" | "option" => Some(Modifiers::ALT),
        "meta" | "super" | "cmd" => Some(Modifiers::META),
        _ => None,
    }
}

/// Folds Shift into letter case so parsed events render back to the same label.
fn apply_modifiers(mut event: KeyEvent, modifiers: Modifiers) -> KeyEvent {
    event.modifiers = modifiers;
    let Some(c) = event.rune.filter(|c| c.is_alphabetic()) else {
        return event;
    };
    if modifiers.contains(Modifiers::SHIFT) {
        if let Some(upper) = single_char(c.to_uppercase()) {
            event.rune = Some(upper);
            event.modifiers.remove(Modifiers::SHIFT);
        }
    } else if let Some(lower) = single_char(c.to_lowercase()) {
        event.rune = Some(lower);
    }
    event
}

/// The only character of a case mapping, `None` when it expands (`ß` to `SS`).
fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parse a key code name (without modifiers).
fn parse_key_code(name: &str) -> Result<KeyEvent, KeyParseError> {
    let name_lower = name.to_ascii_lowercase();
    let none = Modifiers::empty();

    let key = match name_lower.as_str() {
        "esc" | "escape" => Some(Key::Esc),
        "enter" | "return" => Some(Key::Enter),
        "tab" => Some(Key::Tab),
        "backtab" => Some(Key::BackTab),
        "backspace" => Some(Key::Backspace),
        "backspace2" => Some(Key::Backspace2),
        "delete" | "del" => Some(Key::Delete),
        "insert" | "ins" => Some(Key::Insert),
        "home" => Some(Key::Home),
        "end" => Some(Key::End),
        "pageup" | "page_up" | "pgup" => Some(Key::PageUp),
        "pagedown" | "page_down" | "pgdn" => Some(Key::PageDown),
        "up" => Some(Key::Up),
        "down" => Some(Key::Down),
        "left" => Some(Key::Left),
        "right" => Some(Key::Right),
        "print" => Some(Key::Print),
        "pause" => Some(Key::Pause),
        "space" => return Ok(KeyEvent::char(' ', none)),
        _ => None,
    };
    if let Some(key) = key {
        return Ok(KeyEvent::new(key, none));
    }

    // Check for function keys (F1-F64)
    if let Some(num_str) = name_lower.strip_prefix('f')
        && let Ok(num) = num_str.parse::<u8>()
        && (1..=MAX_FUNCTION_KEY).contains(&num)
    {
        return Ok(KeyEvent::new(Key::F(num), none));
    }

    // Check for single character
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyEvent::char(c, none));
    }

    Err(KeyParseError::UnknownKey {
        name: name.to_string(),
    })
}

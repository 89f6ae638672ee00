//! Key event types for keyscope.
//!
//! Responsibilities:
//! - Define the key code (`Key`), modifier mask (`Modifiers`) and `KeyEvent` value.
//! - Convert key events to and from the raw integer triple stored on disk.
//! - Render key events as canonical labels such as `Ctrl+Alt+C`.
//!
//! Does NOT handle:
//! - Parsing label strings (see `keybind` module at crate root).
//! - Integration with crossterm (that's in the TUI crate).
//!
//! Invariants:
//! - Key codes are persisted and must never be renumbered.
//! - Modifier order in labels is fixed: Ctrl, Shift, Alt, Meta.
//! - The all-zero raw triple encodes an absent binding.

use std::borrow::Cow;
use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held while a key was pressed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u16 {
        const SHIFT = 1;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}

const MODIFIER_LABELS: [(Modifiers, &str); 4] = [
    (Modifiers::CTRL, "Ctrl"),
    (Modifiers::SHIFT, "Shift"),
    (Modifiers::ALT, "Alt"),
    (Modifiers::META, "Meta"),
];

const CODE_BACKSPACE: u16 = 8;
const CODE_TAB: u16 = 9;
const CODE_ENTER: u16 = 13;
const CODE_ESC: u16 = 27;
const CODE_BACKSPACE2: u16 = 127;
const CODE_CHAR: u16 = 256;
const CODE_UP: u16 = 257;
const CODE_DOWN: u16 = 258;
const CODE_RIGHT: u16 = 259;
const CODE_LEFT: u16 = 260;
const CODE_PAGE_UP: u16 = 266;
const CODE_PAGE_DOWN: u16 = 267;
const CODE_HOME: u16 = 268;
const CODE_END: u16 = 269;
const CODE_INSERT: u16 = 270;
const CODE_DELETE: u16 = 271;
const CODE_PRINT: u16 = 276;
const CODE_PAUSE: u16 = 277;
const CODE_BACKTAB: u16 = 278;
const CODE_F1: u16 = 279;

/// Highest function key number with a stable code.
pub const MAX_FUNCTION_KEY: u8 = 64;

/// A physical key.
///
/// Every variant maps to a stable integer code (see [`Key::code`]). Codes that
/// have no dedicated variant are kept verbatim in [`Key::Other`] so that files
/// written by newer versions survive a load/save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character; the character itself lives in [`KeyEvent::rune`].
    Char,
    Backspace,
    /// The DEL-style backspace some terminals send.
    Backspace2,
    Tab,
    BackTab,
    Enter,
    Esc,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,
    Print,
    Pause,
    /// Function key F1..F64.
    F(u8),
    Other(u16),
}

impl Key {
    /// Returns the stable integer code for this key.
    pub const fn code(self) -> u16 {
        match self {
            Self::Char => CODE_CHAR,
            Self::Backspace => CODE_BACKSPACE,
            Self::Backspace2 => CODE_BACKSPACE2,
            Self::Tab => CODE_TAB,
            Self::BackTab => CODE_BACKTAB,
            Self::Enter => CODE_ENTER,
            Self::Esc => CODE_ESC,
            Self::Up => CODE_UP,
            Self::Down => CODE_DOWN,
            Self::Left => CODE_LEFT,
            Self::Right => CODE_RIGHT,
            Self::PageUp => CODE_PAGE_UP,
            Self::PageDown => CODE_PAGE_DOWN,
            Self::Home => CODE_HOME,
            Self::End => CODE_END,
            Self::Insert => CODE_INSERT,
            Self::Delete => CODE_DELETE,
            Self::Print => CODE_PRINT,
            Self::Pause => CODE_PAUSE,
            Self::F(n) => {
                let n = if n == 0 {
                    1
                } else if n > MAX_FUNCTION_KEY {
                    MAX_FUNCTION_KEY
                } else {
                    n
                };
                CODE_F1 + n as u16 - 1
            }
            Self::Other(code) => code,
        }
    }

    /// Maps a stable integer code back to a key.
    pub fn from_code(code: u16) -> Self {
        match code {
            CODE_CHAR => Self::Char,
            CODE_BACKSPACE => Self::Backspace,
            CODE_BACKSPACE2 => Self::Backspace2,
            CODE_TAB => Self::Tab,
            CODE_BACKTAB => Self::BackTab,
            CODE_ENTER => Self::Enter,
            CODE_ESC => Self::Esc,
            CODE_UP => Self::Up,
            CODE_DOWN => Self::Down,
            CODE_LEFT => Self::Left,
            CODE_RIGHT => Self::Right,
            CODE_PAGE_UP => Self::PageUp,
            CODE_PAGE_DOWN => Self::PageDown,
            CODE_HOME => Self::Home,
            CODE_END => Self::End,
            CODE_INSERT => Self::Insert,
            CODE_DELETE => Self::Delete,
            CODE_PRINT => Self::Print,
            CODE_PAUSE => Self::Pause,
            c if (CODE_F1..CODE_F1 + MAX_FUNCTION_KEY as u16).contains(&c) => {
                Self::F((c - CODE_F1 + 1) as u8)
            }
            other => Self::Other(other),
        }
    }

    /// Canonical display name, or `None` for keys that are labelled by their character.
    pub fn canonical_name(self) -> Option<Cow<'static, str>> {
        let name = match self {
            Self::Char | Self::Other(_) => return None,
            Self::F(_) => return Some(Cow::Owned(format!("F{}", self.code() - CODE_F1 + 1))),
            Self::Backspace => "Backspace",
            Self::Backspace2 => "Backspace2",
            Self::Tab => "Tab",
            Self::BackTab => "Backtab",
            Self::Enter => "Enter",
            Self::Esc => "Esc",
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::PageUp => "PgUp",
            Self::PageDown => "PgDn",
            Self::Home => "Home",
            Self::End => "End",
            Self::Insert => "Insert",
            Self::Delete => "Delete",
            Self::Print => "Print",
            Self::Pause => "Pause",
        };
        Some(Cow::Borrowed(name))
    }
}

/// The on-disk integer form of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawKeyEvent {
    pub key: u16,
    pub rune: i32,
    pub modifiers: u16,
}

impl RawKeyEvent {
    /// True for the encoding of an absent binding.
    pub fn is_absent(&self) -> bool {
        self.key == 0 && self.rune == 0 && self.modifiers == 0
    }
}

/// A single key press: key code, optional character and modifier mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub rune: Option<char>,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A named (non-character) key.
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            rune: None,
            modifiers,
        }
    }

    /// A character key.
    pub const fn char(c: char, modifiers: Modifiers) -> Self {
        Self {
            key: Key::Char,
            rune: Some(c),
            modifiers,
        }
    }

    pub fn to_raw(&self) -> RawKeyEvent {
        RawKeyEvent {
            key: self.key.code(),
            rune: self.rune.map_or(0, |c| u32::from(c) as i32),
            modifiers: self.modifiers.bits(),
        }
    }

    /// Rebuilds a key event from its raw triple.
    ///
    /// Returns `None` for the all-zero triple. Unknown modifier bits are dropped
    /// and runes that are not valid scalar values are treated as absent.
    pub fn from_raw(raw: RawKeyEvent) -> Option<Self> {
        if raw.is_absent() {
            return None;
        }
        let rune = if raw.rune == 0 {
            None
        } else {
            u32::try_from(raw.rune).ok().and_then(char::from_u32)
        };
        Some(Self {
            key: Key::from_code(raw.key),
            rune,
            modifiers: Modifiers::from_bits_truncate(raw.modifiers),
        })
    }

    /// Returns true if `other` triggers the same binding as `self`.
    ///
    /// Character keys compare by character, named keys by key code. An uppercase
    /// letter implies Shift, so `Alt+U` with Shift held matches `Alt+Shift+U`.
    pub fn matches(&self, other: &KeyEvent) -> bool {
        match (self.key, other.key) {
            (Key::Char, Key::Char) => {
                self.rune == other.rune
                    && self.effective_modifiers() == other.effective_modifiers()
            }
            (a, b) => a == b && self.modifiers == other.modifiers,
        }
    }

    /// Modifiers with Shift folded away when the character already implies it.
    fn effective_modifiers(&self) -> Modifiers {
        if self.implies_shift() {
            self.modifiers.difference(Modifiers::SHIFT)
        } else {
            self.modifiers
        }
    }

    fn implies_shift(&self) -> bool {
        self.key.canonical_name().is_none() && self.rune.is_some_and(|c| c.is_uppercase())
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifiers = self.effective_modifiers();
        let mut parts: Vec<Cow<'_, str>> = MODIFIER_LABELS
            .iter()
            .filter(|(flag, _)| modifiers.contains(*flag))
            .map(|(_, label)| Cow::Borrowed(*label))
            .collect();

        match self.key.canonical_name() {
            Some(name) => parts.push(name),
            None => match self.rune.filter(|c| !c.is_control()) {
                Some(c) if c.is_uppercase() => {
                    parts.push(Cow::Borrowed("Shift"));
                    parts.push(Cow::Owned(c.to_string()));
                }
                Some(c) => parts.push(Cow::Owned(c.to_uppercase().collect())),
                None => parts.push(Cow::Owned(format!(
                    "Key[{},{}]",
                    self.key.code(),
                    self.rune.map_or(0, u32::from)
                ))),
            },
        }

        write!(f, "{}", parts.join("+"))
    }
}

/// Renders an optional binding; an absent binding renders as the empty string.
pub fn render_binding(event: Option<&KeyEvent>) -> String {
    event.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_modifier_order() {
        let event = KeyEvent::char('c', Modifiers::ALT | Modifiers::CTRL);
        assert_eq!(event.to_string(), "Ctrl+Alt+C");

        let event = KeyEvent::new(
            Key::Left,
            Modifiers::META | Modifiers::SHIFT | Modifiers::CTRL | Modifiers::ALT,
        );
        assert_eq!(event.to_string(), "Ctrl+Shift+Alt+Meta+Left");
    }

    #[test]
    fn test_render_uppercase_letter_implies_shift() {
        assert_eq!(KeyEvent::char('U', Modifiers::ALT).to_string(), "Alt+Shift+U");
        // Shift reported alongside an uppercase letter is not repeated
        assert_eq!(
            KeyEvent::char('U', Modifiers::ALT | Modifiers::SHIFT).to_string(),
            "Alt+Shift+U"
        );
        assert_eq!(KeyEvent::char('K', Modifiers::empty()).to_string(), "Shift+K");
    }

    #[test]
    fn test_render_lowercase_and_symbols() {
        assert_eq!(KeyEvent::char('k', Modifiers::CTRL).to_string(), "Ctrl+K");
        assert_eq!(KeyEvent::char('.', Modifiers::ALT).to_string(), "Alt+.");
        assert_eq!(KeyEvent::char('ß', Modifiers::empty()).to_string(), "SS");
    }

    #[test]
    fn test_render_non_ascii_letters_keep_case_apart() {
        assert_eq!(KeyEvent::char('ü', Modifiers::ALT).to_string(), "Alt+Ü");
        assert_eq!(KeyEvent::char('Ü', Modifiers::ALT).to_string(), "Alt+Shift+Ü");
        assert_eq!(
            KeyEvent::char('É', Modifiers::ALT | Modifiers::SHIFT).to_string(),
            "Alt+Shift+É"
        );

        let bound = KeyEvent::char('Ü', Modifiers::ALT);
        assert!(bound.matches(&KeyEvent::char('Ü', Modifiers::ALT | Modifiers::SHIFT)));
        assert!(!bound.matches(&KeyEvent::char('ü', Modifiers::ALT)));
    }

    #[test]
    fn test_render_named_keys() {
        assert_eq!(KeyEvent::new(Key::Enter, Modifiers::ALT).to_string(), "Alt+Enter");
        assert_eq!(KeyEvent::new(Key::PageDown, Modifiers::empty()).to_string(), "PgDn");
        assert_eq!(KeyEvent::new(Key::F(12), Modifiers::empty()).to_string(), "F12");
    }

    #[test]
    fn test_render_fallback_tag() {
        let event = KeyEvent::new(Key::Other(1030), Modifiers::empty());
        assert_eq!(event.to_string(), "Key[1030,0]");

        let event = KeyEvent::char('\u{7}', Modifiers::CTRL);
        assert_eq!(event.to_string(), "Ctrl+Key[256,7]");
    }

    #[test]
    fn test_render_absent_binding() {
        assert_eq!(render_binding(None), "");
        let event = KeyEvent::new(Key::Tab, Modifiers::empty());
        assert_eq!(render_binding(Some(&event)), "Tab");
    }

    #[test]
    fn test_key_codes_are_stable() {
        assert_eq!(Key::Char.code(), 256);
        assert_eq!(Key::Up.code(), 257);
        assert_eq!(Key::Delete.code(), 271);
        assert_eq!(Key::BackTab.code(), 278);
        assert_eq!(Key::F(1).code(), 279);
        assert_eq!(Key::F(64).code(), 342);
        assert_eq!(Key::Enter.code(), 13);
        assert_eq!(Key::Backspace2.code(), 127);
    }

    #[test]
    fn test_from_code_inverts_code() {
        for key in [
            Key::Char,
            Key::Backspace,
            Key::Backspace2,
            Key::Tab,
            Key::BackTab,
            Key::Enter,
            Key::Esc,
            Key::PageUp,
            Key::Print,
            Key::F(7),
            Key::Other(1024),
        ] {
            assert_eq!(Key::from_code(key.code()), key);
        }
        assert_eq!(Key::from_code(343), Key::Other(343));
    }

    #[test]
    fn test_from_raw_zero_is_absent() {
        assert_eq!(KeyEvent::from_raw(RawKeyEvent::default()), None);
    }

    #[test]
    fn test_from_raw_drops_unknown_modifier_bits() {
        let raw = RawKeyEvent {
            key: 256,
            rune: 'k' as i32,
            modifiers: 0b1_0010,
        };
        let event = KeyEvent::from_raw(raw).unwrap();
        assert_eq!(event, KeyEvent::char('k', Modifiers::CTRL));
    }

    #[test]
    fn test_from_raw_invalid_rune() {
        let raw = RawKeyEvent {
            key: 256,
            rune: -5,
            modifiers: 0,
        };
        assert_eq!(KeyEvent::from_raw(raw).unwrap().rune, None);
    }

    #[test]
    fn test_matches_character_keys() {
        let bound = KeyEvent::char('U', Modifiers::ALT);
        assert!(bound.matches(&KeyEvent::char('U', Modifiers::ALT | Modifiers::SHIFT)));
        assert!(!bound.matches(&KeyEvent::char('u', Modifiers::ALT)));
        assert!(!bound.matches(&KeyEvent::char('U', Modifiers::CTRL)));
    }

    #[test]
    fn test_matches_named_keys() {
        let bound = KeyEvent::new(Key::Up, Modifiers::ALT);
        assert!(bound.matches(&KeyEvent::new(Key::Up, Modifiers::ALT)));
        assert!(!bound.matches(&KeyEvent::new(Key::Up, Modifiers::empty())));
        assert!(!bound.matches(&KeyEvent::new(Key::Down, Modifiers::ALT)));
    }
}

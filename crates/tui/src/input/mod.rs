//! Conversion from crossterm events to shortcut key events.
//!
//! Responsibilities:
//! - Map crossterm key codes and modifiers onto `keyscope_config::KeyEvent`.
//! - Drop key release events so each physical press is seen once.
//!
//! Does NOT handle:
//! - Deciding what a key does (see `capture` and `editor`).
//! - Rendering labels (handled by `keyscope_config::types`).
//!
//! Invariants:
//! - Every press or repeat converts to exactly one key event.
//! - crossterm keys without a historical code get a stable code in the
//!   extension range starting at `EXTENSION_BASE`.

use crossterm::event::{
    KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers, MediaKeyCode,
    ModifierKeyCode,
};
use keyscope_config::types::{Key, KeyEvent, MAX_FUNCTION_KEY, Modifiers};

/// First code of the range used for keys only crossterm reports.
pub const EXTENSION_BASE: u16 = 1024;

const CODE_CAPS_LOCK: u16 = EXTENSION_BASE;
const CODE_SCROLL_LOCK: u16 = EXTENSION_BASE + 1;
const CODE_NUM_LOCK: u16 = EXTENSION_BASE + 2;
const CODE_MENU: u16 = EXTENSION_BASE + 3;
const CODE_KEYPAD_BEGIN: u16 = EXTENSION_BASE + 4;
const CODE_NULL: u16 = EXTENSION_BASE + 5;
/// Media keys occupy `MEDIA_BASE..MEDIA_BASE + 32`.
const MEDIA_BASE: u16 = EXTENSION_BASE + 32;
/// Physical modifier keys occupy `MODIFIER_BASE..MODIFIER_BASE + 32`.
const MODIFIER_BASE: u16 = EXTENSION_BASE + 64;

/// Converts a crossterm key event. Returns `None` for key releases.
pub fn to_key_event(event: &CrosstermKeyEvent) -> Option<KeyEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let modifiers = to_modifiers(event.modifiers);
    let key = match event.code {
        KeyCode::Char(c) => return Some(KeyEvent::char(c, modifiers)),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::Esc => Key::Esc,
        KeyCode::PrintScreen => Key::Print,
        KeyCode::Pause => Key::Pause,
        KeyCode::F(n) if (1..=MAX_FUNCTION_KEY).contains(&n) => Key::F(n),
        // Out-of-range function keys keep the code the F-key numbering would give them
        KeyCode::F(n) => Key::Other(Key::F(1).code() + u16::from(n).saturating_sub(1)),
        KeyCode::CapsLock => Key::Other(CODE_CAPS_LOCK),
        KeyCode::ScrollLock => Key::Other(CODE_SCROLL_LOCK),
        KeyCode::NumLock => Key::Other(CODE_NUM_LOCK),
        KeyCode::Menu => Key::Other(CODE_MENU),
        KeyCode::KeypadBegin => Key::Other(CODE_KEYPAD_BEGIN),
        KeyCode::Media(media) => Key::Other(MEDIA_BASE + media_offset(media)),
        KeyCode::Modifier(modifier) => Key::Other(MODIFIER_BASE + modifier_offset(modifier)),
        KeyCode::Null => Key::Other(CODE_NULL),
    };

    Some(KeyEvent::new(key, modifiers))
}

fn media_offset(media: MediaKeyCode) -> u16 {
    match media {
        MediaKeyCode::Play => 0,
        MediaKeyCode::Pause => 1,
        MediaKeyCode::PlayPause => 2,
        MediaKeyCode::Reverse => 3,
        MediaKeyCode::Stop => 4,
        MediaKeyCode::FastForward => 5,
        MediaKeyCode::Rewind => 6,
        MediaKeyCode::TrackNext => 7,
        MediaKeyCode::TrackPrevious => 8,
        MediaKeyCode::Record => 9,
        MediaKeyCode::LowerVolume => 10,
        MediaKeyCode::RaiseVolume => 11,
        MediaKeyCode::MuteVolume => 12,
    }
}

fn modifier_offset(modifier: ModifierKeyCode) -> u16 {
    match modifier {
        ModifierKeyCode::LeftShift => 0,
        ModifierKeyCode::LeftControl => 1,
        ModifierKeyCode::LeftAlt => 2,
        ModifierKeyCode::LeftSuper => 3,
        ModifierKeyCode::LeftHyper => 4,
        ModifierKeyCode::LeftMeta => 5,
        ModifierKeyCode::RightShift => 6,
        ModifierKeyCode::RightControl => 7,
        ModifierKeyCode::RightAlt => 8,
        ModifierKeyCode::RightSuper => 9,
        ModifierKeyCode::RightHyper => 10,
        ModifierKeyCode::RightMeta => 11,
        ModifierKeyCode::IsoLevel3Shift => 12,
        ModifierKeyCode::IsoLevel5Shift => 13,
    }
}

/// Converts crossterm modifiers. SUPER, HYPER and META all map to `Modifiers::META`.
pub fn to_modifiers(modifiers: KeyModifiers) -> Modifiers {
    let mut result = Modifiers::empty();
    if modifiers.contains(KeyModifiers::SHIFT) {
        result |= Modifiers::SHIFT;
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        result |= Modifiers::CTRL;
    }
    if modifiers.contains(KeyModifiers::ALT) {
        result |= Modifiers::ALT;
    }
    if modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::HYPER | KeyModifiers::META) {
        result |= Modifiers::META;
    }
    result
}

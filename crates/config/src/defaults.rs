//! Built-in scopes and shortcut defaults.
//!
//! The tables below are the single source of truth for what a fresh
//! `Registry` contains. Row order is the display order of the editor.
//!
//! Invariants:
//! - Identifiers are persisted; renaming one orphans saved overrides.
//! - Scope identifiers must never be renamed (loading fails on unknown scopes).

use crate::types::{GLOBAL_SCOPE, Key, KeyEvent, Modifiers, Scope, ShortcutDefault};

pub const CHATVIEW_SCOPE: &str = "chatview";
pub const MULTILINE_TEXT_INPUT_SCOPE: &str = "multiline_text_input";

const NONE: Modifiers = Modifiers::empty();
const CTRL: Modifiers = Modifiers::CTRL;
const ALT: Modifiers = Modifiers::ALT;
const SHIFT: Modifiers = Modifiers::SHIFT;
const CTRL_SHIFT: Modifiers = Modifiers::CTRL.union(Modifiers::SHIFT);

pub static DEFAULT_SCOPES: &[Scope] = &[
    Scope {
        identifier: GLOBAL_SCOPE,
        name: "Application wide",
        parent: None,
    },
    Scope {
        identifier: CHATVIEW_SCOPE,
        name: "Chatview",
        parent: Some(GLOBAL_SCOPE),
    },
    Scope {
        identifier: MULTILINE_TEXT_INPUT_SCOPE,
        name: "Multiline text input",
        parent: Some(GLOBAL_SCOPE),
    },
];

const fn named(
    identifier: &'static str,
    name: &'static str,
    scope: &'static str,
    key: Key,
    modifiers: Modifiers,
) -> ShortcutDefault {
    ShortcutDefault {
        identifier,
        name,
        scope,
        event: KeyEvent::new(key, modifiers),
    }
}

const fn rune(
    identifier: &'static str,
    name: &'static str,
    scope: &'static str,
    c: char,
    modifiers: Modifiers,
) -> ShortcutDefault {
    ShortcutDefault {
        identifier,
        name,
        scope,
        event: KeyEvent::char(c, modifiers),
    }
}

pub static DEFAULT_SHORTCUTS: &[ShortcutDefault] = &[
    // Application wide
    named("focus_up", "Focus the next widget above", GLOBAL_SCOPE, Key::Up, ALT),
    named("focus_down", "Focus the next widget below", GLOBAL_SCOPE, Key::Down, ALT),
    named("focus_left", "Focus the next widget to the left", GLOBAL_SCOPE, Key::Left, ALT),
    named("focus_right", "Focus the next widget to the right", GLOBAL_SCOPE, Key::Right, ALT),
    rune("focus_channel_container", "Focus channel container", GLOBAL_SCOPE, 'c', ALT),
    rune("focus_user_container", "Focus user container", GLOBAL_SCOPE, 'u', ALT),
    rune("focus_guild_container", "Focus guild container", GLOBAL_SCOPE, 's', ALT),
    rune("focus_private_chat_page", "Focus private chat page", GLOBAL_SCOPE, 'p', ALT),
    rune("switch_to_previous_channel", "Switch to previous channel", GLOBAL_SCOPE, 'l', ALT),
    rune("focus_message_input", "Focus message input", GLOBAL_SCOPE, 'm', ALT),
    rune("focus_message_container", "Focus message container", GLOBAL_SCOPE, 't', ALT),
    rune("focus_command_input", "Focus command input", GLOBAL_SCOPE, 'i', ALT),
    rune("focus_command_output", "Focus command output", GLOBAL_SCOPE, 'o', ALT),
    rune("toggle_user_container", "Toggle user container", GLOBAL_SCOPE, 'U', ALT),
    rune("toggle_command_view", "Toggle command view", GLOBAL_SCOPE, '.', ALT),
    rune("toggle_bare_chat", "Toggle bare chat", GLOBAL_SCOPE, 'b', ALT),
    rune("exit_application", "Exit application", GLOBAL_SCOPE, 'c', CTRL),
    // Chatview
    rune("quote_selected_message", "Quote selected message", CHATVIEW_SCOPE, 'q', NONE),
    rune("edit_selected_message", "Edit selected message", CHATVIEW_SCOPE, 'e', NONE),
    rune(
        "download_message_files",
        "Download all files in selected message",
        CHATVIEW_SCOPE,
        'd',
        NONE,
    ),
    rune(
        "reply_selected_message",
        "Reply to author of selected message",
        CHATVIEW_SCOPE,
        'r',
        NONE,
    ),
    rune(
        "new_direct_message",
        "Create new direct message with author",
        CHATVIEW_SCOPE,
        'p',
        NONE,
    ),
    rune(
        "copy_selected_message_link",
        "Copy link to selected message",
        CHATVIEW_SCOPE,
        'l',
        NONE,
    ),
    rune(
        "copy_selected_message",
        "Copy content of selected message",
        CHATVIEW_SCOPE,
        'c',
        NONE,
    ),
    rune(
        "toggle_selected_message_spoilers",
        "Toggle spoilers in selected message",
        CHATVIEW_SCOPE,
        's',
        NONE,
    ),
    named(
        "delete_selected_message",
        "Delete the selected message",
        CHATVIEW_SCOPE,
        Key::Delete,
        NONE,
    ),
    rune(
        "view_selected_message_images",
        "View files attached to selected message",
        CHATVIEW_SCOPE,
        'o',
        NONE,
    ),
    named("chat_view_selection_up", "Move selection up by one", CHATVIEW_SCOPE, Key::Up, NONE),
    named(
        "chat_view_selection_down",
        "Move selection down by one",
        CHATVIEW_SCOPE,
        Key::Down,
        NONE,
    ),
    named(
        "chat_view_selection_top",
        "Move selection to the top",
        CHATVIEW_SCOPE,
        Key::Home,
        NONE,
    ),
    named(
        "chat_view_selection_bottom",
        "Move selection to the bottom",
        CHATVIEW_SCOPE,
        Key::End,
        NONE,
    ),
    // Multiline text input
    named(
        "expand_selection_word_to_left",
        "Expand selection one character to the left",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Left,
        SHIFT,
    ),
    named(
        "expand_selection_word_to_right",
        "Expand selection one character to the right",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Right,
        SHIFT,
    ),
    rune("select_all", "Select all", MULTILINE_TEXT_INPUT_SCOPE, 'a', CTRL),
    named(
        "select_word_to_left",
        "Select word to the left",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Left,
        CTRL_SHIFT,
    ),
    named(
        "select_word_to_right",
        "Select word to the right",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Right,
        CTRL_SHIFT,
    ),
    named(
        "select_to_start_of_line",
        "Select to start of line",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Home,
        SHIFT,
    ),
    named(
        "select_to_end_of_line",
        "Select to end of line",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::End,
        SHIFT,
    ),
    named(
        "select_to_start_of_text",
        "Select to start of text",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Home,
        CTRL_SHIFT,
    ),
    named(
        "select_to_end_of_text",
        "Select to end of text",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::End,
        CTRL_SHIFT,
    ),
    named(
        "move_cursor_left",
        "Move cursor one character to the left",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Left,
        NONE,
    ),
    named(
        "move_cursor_right",
        "Move cursor one character to the right",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Right,
        NONE,
    ),
    named(
        "move_cursor_word_left",
        "Move cursor one word to the left",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Left,
        CTRL,
    ),
    named(
        "move_cursor_word_right",
        "Move cursor one word to the right",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Right,
        CTRL,
    ),
    named(
        "move_cursor_to_start_of_line",
        "Move cursor to start of line",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Home,
        NONE,
    ),
    named(
        "move_cursor_to_end_of_line",
        "Move cursor to end of line",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::End,
        NONE,
    ),
    named(
        "move_cursor_to_start_of_text",
        "Move cursor to start of text",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Home,
        CTRL,
    ),
    named(
        "move_cursor_to_end_of_text",
        "Move cursor to end of text",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::End,
        CTRL,
    ),
    named(
        "delete_left",
        "Delete character to the left",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Backspace,
        NONE,
    ),
    named(
        "delete_right",
        "Delete character to the right",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Delete,
        NONE,
    ),
    rune(
        "delete_word_left",
        "Delete word to the left",
        MULTILINE_TEXT_INPUT_SCOPE,
        'w',
        CTRL,
    ),
    named(
        "input_new_line",
        "Insert a new line",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Enter,
        ALT,
    ),
    rune(
        "copy_selection",
        "Copy selected text",
        MULTILINE_TEXT_INPUT_SCOPE,
        'c',
        CTRL,
    ),
    rune(
        "paste_at_selection",
        "Paste clipboard at cursor",
        MULTILINE_TEXT_INPUT_SCOPE,
        'v',
        CTRL,
    ),
    named(
        "send_message",
        "Send message",
        MULTILINE_TEXT_INPUT_SCOPE,
        Key::Enter,
        NONE,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_scope_pairs_are_unique() {
        for (i, a) in DEFAULT_SHORTCUTS.iter().enumerate() {
            for b in &DEFAULT_SHORTCUTS[i + 1..] {
                assert!(
                    !(a.identifier == b.identifier && a.scope == b.scope),
                    "duplicate default shortcut {}/{}",
                    a.scope,
                    a.identifier
                );
            }
        }
    }

    #[test]
    fn test_every_default_scope_is_defined() {
        for default in DEFAULT_SHORTCUTS {
            assert!(
                DEFAULT_SCOPES.iter().any(|s| s.identifier == default.scope),
                "{} uses undefined scope {}",
                default.identifier,
                default.scope
            );
        }
    }

    #[test]
    fn test_scope_identifiers_are_unique() {
        for (i, a) in DEFAULT_SCOPES.iter().enumerate() {
            assert!(DEFAULT_SCOPES[i + 1..].iter().all(|b| b.identifier != a.identifier));
        }
    }

    #[test]
    fn test_toggle_user_container_default() {
        let default = DEFAULT_SHORTCUTS
            .iter()
            .find(|d| d.identifier == "toggle_user_container")
            .unwrap();
        assert_eq!(default.event.to_string(), "Alt+Shift+U");
    }
}

//! Rendering of the shortcut editor.
//!
//! Layout, top to bottom: the shortcut table, the Close control, and a
//! one-line footer that shows either the status message or key hints.

use keyscope_config::Persist;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::capture::ShortcutRow;
use crate::editor::{CLOSE_ID, Editor, SHORTCUTS_ID, StatusLevel};

const IDLE_HINTS: &str = "Enter: rebind  Backspace: clear  r: reset  Tab: next  Esc: close";
const CAPTURE_HINT: &str = "Press any key to bind it";

/// Draw the whole editor.
pub fn render<P: Persist>(f: &mut Frame, editor: &mut Editor<P>) {
    let [table_area, close_area, footer_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_table(f, table_area, editor);
    render_close(f, close_area, editor.is_focused(CLOSE_ID));
    render_footer(f, footer_area, editor);
}

fn render_table<P: Persist>(f: &mut Frame, area: Rect, editor: &mut Editor<P>) {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Scope").style(header_style),
        Cell::from("Action").style(header_style),
        Cell::from("Shortcut").style(header_style),
    ]);

    let rows: Vec<Row> = editor
        .controller()
        .rows()
        .into_iter()
        .map(shortcut_row)
        .collect();

    let focused = editor.is_focused(SHORTCUTS_ID);
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Shortcuts")
            .border_style(border_style),
    )
    .row_highlight_style(if focused {
        Style::default().bg(Color::DarkGray).fg(Color::Yellow)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    });

    f.render_stateful_widget(table, area, &mut editor.table_state);
}

fn shortcut_row(row: ShortcutRow) -> Row<'static> {
    let binding = if row.awaiting_input {
        Span::styled(
            "<press a key>",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if row.is_default {
        Span::raw(row.binding)
    } else {
        Span::styled(row.binding, Style::default().fg(Color::Green))
    };

    Row::new(vec![
        Cell::from(row.scope),
        Cell::from(row.name),
        Cell::from(Line::from(vec![binding])),
    ])
}

fn render_close(f: &mut Frame, area: Rect, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let close = Paragraph::new(Span::styled("[ Close ]", style)).alignment(Alignment::Right);
    f.render_widget(close, area);
}

fn render_footer<P: Persist>(f: &mut Frame, area: Rect, editor: &Editor<P>) {
    let line = match editor.status() {
        Some(status) => {
            let style = match status.level {
                StatusLevel::Info => Style::default().fg(Color::Green),
                StatusLevel::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(status.message.clone(), style))
        }
        None if editor.controller().is_capturing() => Line::from(CAPTURE_HINT),
        None => Line::from(Span::styled(IDLE_HINTS, Style::default().fg(Color::Gray))),
    };
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use keyscope_config::{Key, KeyEvent, Modifiers, PersistenceError, Registry};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::editor::Status;

    struct NullStore;

    impl Persist for NullStore {
        fn persist(&self, _registry: &Registry) -> Result<(), PersistenceError> {
            Ok(())
        }
    }

    fn draw(editor: &mut Editor<NullStore>) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).expect("Failed to create terminal");
        terminal
            .draw(|f| render(f, editor))
            .expect("Failed to render");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_table_and_hints() {
        let mut editor = Editor::new(Registry::initialize(), NullStore);
        let screen = draw(&mut editor);
        assert!(screen.contains("Shortcuts"));
        assert!(screen.contains("Application wide"));
        assert!(screen.contains("Alt+Shift+U"));
        assert!(screen.contains("[ Close ]"));
        assert!(screen.contains("Enter: rebind"));
    }

    #[test]
    fn test_marks_row_awaiting_input() {
        let mut editor = Editor::new(Registry::initialize(), NullStore);
        editor.handle_key(KeyEvent::new(Key::Enter, Modifiers::empty()));
        let screen = draw(&mut editor);
        assert!(screen.contains("<press a key>"));
    }

    #[test]
    fn test_shows_error_status() {
        let mut editor = Editor::new(Registry::initialize(), NullStore);
        editor.set_status(Status::error("Failed to save"));
        let screen = draw(&mut editor);
        assert!(screen.contains("Failed to save"));
        assert!(!screen.contains("Enter: rebind"));
    }
}

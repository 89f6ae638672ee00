//! Keyscope - view and rebind scoped keyboard shortcuts.
//!
//! Responsibilities:
//! - Orchestrate startup: CLI parsing, logging, loading the shortcuts file.
//! - Dispatch non-interactive subcommands.
//! - Run the interactive editor's terminal event loop.
//!
//! Does NOT handle:
//! - Shortcut model or persistence (see `crates/config`).
//! - Key handling rules (see `keyscope_tui::capture` and `keyscope_tui::editor`).
//!
//! Invariants:
//! - The editor enters raw mode and the alternate screen, and restores both on exit.
//! - Load errors are reported once at startup.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use keyscope_config::ShortcutStore;
use keyscope_tui::cli::{Cli, Command};
use keyscope_tui::editor::{Editor, Status};
use keyscope_tui::runtime::{
    commands,
    logging::init_logging,
    startup::{LoadFailurePolicy, Startup, load_registry, resolve_store},
    terminal::TerminalGuard,
};
use keyscope_tui::{input::to_key_event, ui};
use ratatui::{Terminal, backend::CrosstermBackend};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command();

    // Guard must live for the whole of main() so file logs are flushed
    let _log_guard = init_logging(cli.log_dir.as_deref(), command.is_interactive())?;

    let store = resolve_store(cli.config_dir.as_deref())?;
    tracing::info!(path = %store.path().display(), ?command, "Starting keyscope");

    let startup = load_registry(&store, LoadFailurePolicy::for_command(&command))?;

    match command {
        Command::Edit => run_editor(store, startup),
        other => {
            if let Some(warning) = &startup.warning {
                eprintln!("warning: {warning}");
            }
            commands::run(&other, &store, startup.registry, &mut std::io::stdout().lock())
        }
    }
}

fn run_editor(store: ShortcutStore, startup: Startup) -> Result<()> {
    let mut editor = Editor::new(startup.registry, store);
    if let Some(warning) = startup.warning {
        editor.set_status(Status::error(warning));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Restores the terminal on panic/unwind
    let _terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    while !editor.should_quit() {
        terminal.draw(|f| ui::render(f, &mut editor))?;

        if let Event::Key(key) = event::read()?
            && let Some(event) = to_key_event(&key)
        {
            editor.handle_key(event);
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("Editor closed");
    Ok(())
}

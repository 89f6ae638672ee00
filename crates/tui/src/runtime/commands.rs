//! Non-interactive subcommands.
//!
//! `bind`, `clear` and `reset <id>` go through the capture controller's
//! direct operations so they share its save-or-roll-back path.

use std::io::Write;

use anyhow::{Context, Result, bail};
use keyscope_config::{Persist, Registry, ShortcutStore, parse_key};

use crate::capture::CaptureController;
use crate::cli::Command;

/// Runs every command except `edit`.
pub fn run(
    command: &Command,
    store: &ShortcutStore,
    registry: Registry,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::List => list(&registry, out),
        Command::Path => {
            writeln!(out, "{}", store.path().display())?;
            Ok(())
        }
        Command::Bind {
            identifier,
            keys,
            scope,
        } => {
            let event = parse_key(keys).with_context(|| format!("Invalid key '{keys}'"))?;
            let mut controller = CaptureController::new(registry, store);
            let row = find_row(controller.registry(), identifier, scope)?;
            controller.bind(row, event)?;
            writeln!(out, "{identifier} ({scope}) = {event}")?;
            Ok(())
        }
        Command::Clear { identifier, scope } => {
            let mut controller = CaptureController::new(registry, store);
            let row = find_row(controller.registry(), identifier, scope)?;
            controller.clear(row)?;
            writeln!(out, "{identifier} ({scope}) cleared")?;
            Ok(())
        }
        Command::Reset {
            identifier: Some(identifier),
            scope,
            all: false,
        } => {
            let mut controller = CaptureController::new(registry, store);
            let row = find_row(controller.registry(), identifier, scope)?;
            controller.reset(row)?;
            let label = controller
                .registry()
                .get(row)
                .map(|s| s.binding_label())
                .unwrap_or_default();
            writeln!(out, "{identifier} ({scope}) = {label}")?;
            Ok(())
        }
        Command::Reset { .. } => {
            let mut registry = registry;
            registry.reset_all();
            store.persist(&registry)?;
            writeln!(out, "All {} shortcuts reset", registry.len())?;
            Ok(())
        }
        Command::Edit => bail!("The editor needs a terminal; run it from main"),
    }
}

/// Prints one line per shortcut: scope, identifier, binding, and `*` when changed.
pub fn list(registry: &Registry, out: &mut impl Write) -> Result<()> {
    let id_width = registry
        .shortcuts()
        .iter()
        .map(|s| s.identifier().len())
        .max()
        .unwrap_or(0);
    let scope_width = registry
        .scopes()
        .iter()
        .map(|s| s.identifier.len())
        .max()
        .unwrap_or(0);

    for shortcut in registry.shortcuts() {
        let marker = if shortcut.is_default() { "" } else { " *" };
        let line = format!(
            "{:scope_width$}  {:id_width$}  {}{}",
            shortcut.scope(),
            shortcut.identifier(),
            shortcut.binding_label(),
            marker,
        );
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

fn find_row(registry: &Registry, identifier: &str, scope: &str) -> Result<usize> {
    if registry.scopes().resolve(scope).is_none() {
        bail!("Unknown scope '{scope}'");
    }
    match registry.position(identifier, scope) {
        Some(row) => Ok(row),
        None => bail!("Unknown shortcut '{identifier}' in scope '{scope}'"),
    }
}

//! The capture state machine.

use keyscope_config::{Key, KeyEvent, Modifiers, Persist, Registry, render_binding};

use super::{CaptureError, ShortcutRow};

/// Callback used to hand focus to a neighbouring control.
pub type FocusCallback = Box<dyn FnMut()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    /// The next key becomes the binding of `row`.
    Capturing { row: usize },
}

/// What `handle_key` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Not consumed; the host may use it for navigation.
    PassThrough,
    Armed { row: usize },
    Bound { row: usize, event: KeyEvent },
    Cleared { row: usize },
    Reset { row: usize },
    FocusNext,
    FocusPrevious,
}

impl CaptureOutcome {
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}

/// Drives rebinding of the shortcuts in a [`Registry`].
///
/// Every change is followed by a save through `P`. When the save fails the
/// change is undone and a [`CaptureError::Persist`] is returned.
pub struct CaptureController<P: Persist> {
    registry: Registry,
    store: P,
    state: CaptureState,
    selected: usize,
    on_focus_next: Option<FocusCallback>,
    on_focus_previous: Option<FocusCallback>,
}

impl<P: Persist> CaptureController<P> {
    pub fn new(registry: Registry, store: P) -> Self {
        Self {
            registry,
            store,
            state: CaptureState::Idle,
            selected: 0,
            on_focus_next: None,
            on_focus_previous: None,
        }
    }

    /// Called on Tab.
    pub fn set_on_focus_next(&mut self, callback: impl FnMut() + 'static) {
        self.on_focus_next = Some(Box::new(callback));
    }

    /// Called on Shift+Tab.
    pub fn set_on_focus_previous(&mut self, callback: impl FnMut() + 'static) {
        self.on_focus_previous = Some(Box::new(callback));
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// True while a row waits for its new key. Hosts must not treat Esc as
    /// "close" while this is set.
    pub fn is_capturing(&self) -> bool {
        matches!(self.state, CaptureState::Capturing { .. })
    }

    pub fn capturing_row(&self) -> Option<usize> {
        match self.state {
            CaptureState::Capturing { row } => Some(row),
            CaptureState::Idle => None,
        }
    }

    /// Replaces the shortcut list and cancels any capture in progress.
    pub fn set_shortcuts(&mut self, registry: Registry) {
        if let Some(row) = self.capturing_row() {
            tracing::debug!(row, "Capture cancelled by new shortcut list");
        }
        self.registry = registry;
        self.state = CaptureState::Idle;
        self.selected = self.selected.min(self.registry.len().saturating_sub(1));
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the selection, clamped to the last row. Ignored while capturing.
    pub fn select(&mut self, row: usize) {
        if self.is_capturing() {
            return;
        }
        self.selected = row.min(self.registry.len().saturating_sub(1));
    }

    /// Feeds one key event through the state machine.
    pub fn handle_key(&mut self, event: KeyEvent) -> Result<CaptureOutcome, CaptureError> {
        if let CaptureState::Capturing { row } = self.state {
            // Any key commits, including Esc and navigation keys
            self.state = CaptureState::Idle;
            self.bind(row, event)?;
            return Ok(CaptureOutcome::Bound { row, event });
        }

        match event.key {
            Key::Tab if !event.modifiers.contains(Modifiers::SHIFT) => {
                if let Some(callback) = self.on_focus_next.as_mut() {
                    callback();
                }
                Ok(CaptureOutcome::FocusNext)
            }
            Key::Tab | Key::BackTab => {
                if let Some(callback) = self.on_focus_previous.as_mut() {
                    callback();
                }
                Ok(CaptureOutcome::FocusPrevious)
            }
            _ if self.registry.is_empty() => Ok(CaptureOutcome::PassThrough),
            Key::Enter => {
                let row = self.selected;
                self.state = CaptureState::Capturing { row };
                tracing::debug!(row, "Awaiting key for shortcut");
                Ok(CaptureOutcome::Armed { row })
            }
            Key::Backspace | Key::Backspace2 => {
                let row = self.selected;
                self.clear(row)?;
                Ok(CaptureOutcome::Cleared { row })
            }
            Key::Char if event.rune == Some('r') && event.modifiers.is_empty() => {
                let row = self.selected;
                self.reset(row)?;
                Ok(CaptureOutcome::Reset { row })
            }
            _ => Ok(CaptureOutcome::PassThrough),
        }
    }

    /// Binds `event` to the shortcut at `row` and saves.
    pub fn bind(&mut self, row: usize, event: KeyEvent) -> Result<(), CaptureError> {
        self.commit(row, Some(event))
    }

    /// Clears the binding at `row` and saves.
    pub fn clear(&mut self, row: usize) -> Result<(), CaptureError> {
        self.commit(row, None)
    }

    /// Restores the default binding at `row` and saves.
    pub fn reset(&mut self, row: usize) -> Result<(), CaptureError> {
        let default = self
            .registry
            .get(row)
            .map(|s| *s.default_event())
            .ok_or(CaptureError::NoSuchRow(row))?;
        self.commit(row, Some(default))
    }

    fn commit(&mut self, row: usize, event: Option<KeyEvent>) -> Result<(), CaptureError> {
        let shortcut = self
            .registry
            .get_mut(row)
            .ok_or(CaptureError::NoSuchRow(row))?;
        let previous = shortcut.set_event(event);

        if let Err(source) = self.store.persist(&self.registry) {
            if let Some(shortcut) = self.registry.get_mut(row) {
                shortcut.set_event(previous);
            }
            tracing::warn!(row, error = %source, "Shortcut change rolled back");
            return Err(CaptureError::Persist {
                row,
                attempted: event,
                source,
            });
        }

        if let Some(shortcut) = self.registry.get(row) {
            tracing::info!(
                identifier = shortcut.identifier(),
                scope = shortcut.scope(),
                binding = %render_binding(event.as_ref()),
                "Shortcut updated"
            );
        }
        Ok(())
    }

    /// One view-model row per shortcut, in registry order.
    pub fn rows(&self) -> Vec<ShortcutRow> {
        let capturing = self.capturing_row();
        self.registry
            .shortcuts()
            .iter()
            .enumerate()
            .map(|(row, shortcut)| ShortcutRow {
                scope: self
                    .registry
                    .scopes()
                    .resolve(shortcut.scope())
                    .map_or_else(|| shortcut.scope().to_string(), |s| s.name.to_string()),
                name: shortcut.name().to_string(),
                binding: shortcut.binding_label(),
                awaiting_input: capturing == Some(row),
                is_default: shortcut.is_default(),
            })
            .collect()
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }
}

impl<P: Persist + std::fmt::Debug> std::fmt::Debug for CaptureController<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureController")
            .field("store", &self.store)
            .field("state", &self.state)
            .field("selected", &self.selected)
            .field("shortcuts", &self.registry.len())
            .finish_non_exhaustive()
    }
}

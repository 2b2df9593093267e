//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.

use crate::tui::app::{App, Dialog};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind != KeyEventKind::Release => {
                            return Ok(Event::Key(key))
                        }
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore releases, mouse, focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event, carried out by [`App::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Switch between viewing and editing.
    ToggleEditMode,
    /// Flip visibility of the widget with the given id.
    ToggleVisibility(String),
    /// Flip the lock of the widget with the given id.
    ToggleLock(String),
    /// Remove the widget with the given id (already confirmed).
    Remove(String),
    /// Add a widget from the catalog entry with the given id.
    Add(String),
    /// Answer a palette query.
    Ask(String),
}

/// Handles a key event by updating view state and returning the action to apply.
///
/// An open dialog takes all keys except Ctrl-C.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.dialog.take() {
        Some(dialog) => handle_dialog_key(app, dialog, key),
        None => handle_dashboard_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Action {
    let editing = app.mode().is_editing();
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('e') => Action::ToggleEditMode,
        KeyCode::Esc if editing => Action::ToggleEditMode,
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            Action::None
        }
        KeyCode::PageDown => {
            app.scroll_down();
            Action::None
        }
        KeyCode::PageUp => {
            app.scroll_up();
            Action::None
        }
        KeyCode::Char('/') => {
            app.open_palette();
            Action::None
        }
        KeyCode::Char('v') if editing => app
            .selected_id()
            .map_or(Action::None, Action::ToggleVisibility),
        KeyCode::Char('l') if editing => app.selected_id().map_or(Action::None, Action::ToggleLock),
        KeyCode::Char('d') if editing => {
            app.request_remove();
            Action::None
        }
        KeyCode::Char('a') if editing => {
            app.open_add_picker();
            Action::None
        }
        _ => Action::None,
    }
}

/// Routes a key to the open `dialog`. The dialog is put back unless the key
/// closes it.
fn handle_dialog_key(app: &mut App, dialog: Dialog, key: KeyEvent) -> Action {
    match dialog {
        Dialog::ConfirmRemove { id, title } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Action::Remove(id),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::None,
            _ => {
                app.dialog = Some(Dialog::ConfirmRemove { id, title });
                Action::None
            }
        },
        Dialog::AddWidget { cursor } => {
            let available: Vec<String> = app.available().iter().map(|e| e.id.clone()).collect();
            let last = available.len().saturating_sub(1);
            match key.code {
                KeyCode::Esc => Action::None,
                KeyCode::Enter => available
                    .get(cursor)
                    .cloned()
                    .map_or(Action::None, Action::Add),
                KeyCode::Char('j') | KeyCode::Down => {
                    app.dialog = Some(Dialog::AddWidget {
                        cursor: (cursor + 1).min(last),
                    });
                    Action::None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    app.dialog = Some(Dialog::AddWidget {
                        cursor: cursor.saturating_sub(1),
                    });
                    Action::None
                }
                _ => {
                    app.dialog = Some(Dialog::AddWidget { cursor });
                    Action::None
                }
            }
        }
        Dialog::Palette {
            mut input,
            response,
        } => {
            let action = match key.code {
                KeyCode::Esc => return Action::None,
                KeyCode::Enter if !input.trim().is_empty() => Action::Ask(input.clone()),
                KeyCode::Backspace => {
                    input.pop();
                    Action::None
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    Action::None
                }
                _ => Action::None,
            };
            app.dialog = Some(Dialog::Palette { input, response });
            action
        }
    }
}

//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.
//! Layout changes go through the [`DashboardController`]; whatever change
//! callback it was built with (normally the layout store's autosave) sees
//! every accepted mutation.

use crate::dashboard::{renderable_widgets, RenderReport, DEFAULT_COLUMNS, DEFAULT_ROW_HEIGHT};
use crate::fleet::FleetRepository;
use crate::layout::{CatalogEntry, DashboardController, EditError, EditMode, Widget};
use crate::palette::{self, PaletteResponse};
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::ui::render;
use crate::widgets::WidgetRegistry;
use chrono::NaiveDateTime;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

/// How long a status message stays in the footer.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Grid and refresh settings, normally taken from `[dashboard]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    /// Grid columns at full width.
    pub columns: u16,
    /// Terminal rows per grid row.
    pub row_height: u16,
    /// Redraw interval.
    pub tick_rate: Duration,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            row_height: DEFAULT_ROW_HEIGHT,
            tick_rate: Duration::from_millis(250),
        }
    }
}

/// Modal overlay on top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Waiting for y/n before removing a widget.
    ConfirmRemove {
        /// Widget to remove.
        id: String,
        /// Its title, for the prompt.
        title: String,
    },
    /// "Add widget" picker over the available catalog entries.
    AddWidget {
        /// Highlighted entry.
        cursor: usize,
    },
    /// Command palette.
    Palette {
        /// Query being typed.
        input: String,
        /// Answer to the last submitted query.
        response: Option<PaletteResponse>,
    },
}

/// Core application state for the TUI.
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Layout, edit mode and catalog.
    pub controller: DashboardController,
    /// Widget renderers.
    pub registry: WidgetRegistry,
    fleet: Box<dyn FleetRepository>,
    /// Grid and refresh settings.
    pub settings: ViewSettings,
    /// Index into the currently renderable widgets.
    pub selected_index: Option<usize>,
    /// Open overlay, if any.
    pub dialog: Option<Dialog>,
    /// Grid rows scrolled off the top.
    pub scroll_rows: u16,
    /// Temporary footer message with its expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Ticks processed.
    pub tick_count: u64,
    /// Report of the most recent render pass.
    pub last_report: RenderReport,
    fixed_now: Option<NaiveDateTime>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("should_quit", &self.should_quit)
            .field("controller", &self.controller)
            .field("selected_index", &self.selected_index)
            .field("dialog", &self.dialog)
            .field("scroll_rows", &self.scroll_rows)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates an app in viewing mode with the first widget selected.
    pub fn new(
        controller: DashboardController,
        registry: WidgetRegistry,
        fleet: Box<dyn FleetRepository>,
        settings: ViewSettings,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            controller,
            registry,
            fleet,
            settings,
            selected_index: None,
            dialog: None,
            scroll_rows: 0,
            status_message: None,
            tick_count: 0,
            last_report: RenderReport::default(),
            fixed_now: None,
        };
        app.clamp_selection();
        app
    }

    /// Pins the clock, so renders are reproducible.
    pub fn with_fixed_now(mut self, now: NaiveDateTime) -> Self {
        self.fixed_now = Some(now);
        self
    }

    /// Current local time, or the pinned time.
    pub fn now(&self) -> NaiveDateTime {
        self.fixed_now
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }

    /// Injected fleet data.
    pub fn fleet(&self) -> &dyn FleetRepository {
        self.fleet.as_ref()
    }

    /// Current edit mode.
    pub fn mode(&self) -> EditMode {
        self.controller.mode()
    }

    /// Widgets drawn in the current mode, in order.
    pub fn renderable(&self) -> Vec<&Widget> {
        renderable_widgets(self.controller.layout(), self.controller.mode())
    }

    /// The selected widget, if any.
    pub fn selected_widget(&self) -> Option<&Widget> {
        self.selected_index
            .and_then(|i| self.renderable().get(i).copied())
    }

    /// Id of the selected widget, if any.
    pub fn selected_id(&self) -> Option<String> {
        self.selected_widget().map(|w| w.id.clone())
    }

    /// Keeps the selection inside the renderable list.
    pub fn clamp_selection(&mut self) {
        let len = self.renderable().len();
        self.selected_index = match (len, self.selected_index) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
    }

    /// Moves the selection down by one, clamped to the last widget.
    pub fn select_next(&mut self) {
        let len = self.renderable().len();
        if len == 0 {
            return;
        }
        self.selected_index = Some(self.selected_index.map_or(0, |i| (i + 1).min(len - 1)));
    }

    /// Moves the selection up by one, clamped to the first widget.
    pub fn select_previous(&mut self) {
        if self.renderable().is_empty() {
            return;
        }
        self.selected_index = Some(self.selected_index.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Scrolls one grid row down, stopping at the last occupied row.
    pub fn scroll_down(&mut self) {
        let max = self.last_report.total_rows.saturating_sub(1);
        self.scroll_rows = (self.scroll_rows + 1).min(max);
    }

    /// Scrolls one grid row up.
    pub fn scroll_up(&mut self) {
        self.scroll_rows = self.scroll_rows.saturating_sub(1);
    }

    /// Catalog entries the picker offers.
    pub fn available(&self) -> Vec<&CatalogEntry> {
        self.controller.available()
    }

    /// Shows `message` in the footer for a few seconds.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Clears the status message once it has expired.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Opens the remove confirmation for the selected widget.
    pub fn request_remove(&mut self) {
        let Some((id, title, locked)) = self
            .selected_widget()
            .map(|w| (w.id.clone(), w.title.clone(), w.is_locked))
        else {
            return;
        };
        if locked {
            self.set_status(EditError::Locked { id }.to_string());
            return;
        }
        self.dialog = Some(Dialog::ConfirmRemove { id, title });
    }

    /// Opens the add-widget picker, or reports that nothing is left to add.
    pub fn open_add_picker(&mut self) {
        if self.available().is_empty() {
            self.set_status("Every catalog widget is already on the dashboard");
            return;
        }
        self.dialog = Some(Dialog::AddWidget { cursor: 0 });
    }

    /// Opens an empty command palette.
    pub fn open_palette(&mut self) {
        self.dialog = Some(Dialog::Palette {
            input: String::new(),
            response: None,
        });
    }

    /// Carries out `action`.
    pub fn apply(&mut self, action: Action) {
        let result = match action {
            Action::None => Ok(()),
            Action::Quit => {
                self.should_quit = true;
                Ok(())
            }
            Action::ToggleEditMode => {
                let editing = self.controller.mode().is_editing();
                self.controller.set_edit_mode(!editing);
                Ok(())
            }
            Action::ToggleVisibility(id) => self.controller.toggle_visibility(&id),
            Action::ToggleLock(id) => self.controller.toggle_lock(&id),
            Action::Remove(id) => self.controller.remove(&id).map(|()| {
                self.set_status(format!("Removed '{id}'"));
            }),
            Action::Add(catalog_id) => self.controller.add(&catalog_id).map(|new_id| {
                self.set_status(format!("Added '{new_id}'"));
            }),
            Action::Ask(query) => {
                let response = palette::respond(&query, self.fleet.as_ref(), self.now());
                if let Some(Dialog::Palette { response: slot, .. }) = &mut self.dialog {
                    *slot = Some(response);
                }
                Ok(())
            }
        };
        if let Err(e) = result {
            tracing::debug!("edit rejected: {e}");
            self.set_status(e.to_string());
        }
        self.clamp_selection();
    }

    /// Runs the TUI until the user quits.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;
        let result = self.event_loop().await;
        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        let event_handler = EventHandler::new(self.settings.tick_rate);
        let mut reader = EventStream::new();

        terminal.draw(|frame| render(frame, self))?;
        loop {
            match event_handler.next(&mut reader).await? {
                Event::Key(key) => {
                    let action = handle_key_event(self, key);
                    self.apply(action);
                    if self.should_quit {
                        return Ok(());
                    }
                }
                Event::Tick => {
                    self.tick_count += 1;
                    self.expire_status_message();
                }
                Event::Resize(_, _) => {}
            }
            terminal.draw(|frame| render(frame, self))?;
        }
    }
}

/// Enters raw mode and the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

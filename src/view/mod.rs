//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod dropdown;
mod helpers;
mod layout;
mod picker;
mod search_input;
mod status;
mod styles;
mod tabs;
mod time_field;

pub use dropdown::{FAVORITE_MARKER, NO_RESULTS, render_dropdown};
pub use helpers::truncate_to_width;
pub use layout::{hint_for, render_screen};
pub use picker::{render_picker, wheel_rows};
pub use search_input::{SEARCH_PLACEHOLDER, SearchInput};
pub use status::{LOADING_MESSAGE, RELOAD_HINT};
pub use styles::{ColorConfig, ScreenStyles};
pub use tabs::render_history;
pub use time_field::TimeField;

use crate::config::{KeyBindings, KeyContext};
use crate::source::SourceLoader;
use crate::state::{ScreenController, ScreenEffect};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// How often the loop wakes up to collect finished loads.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    controller: ScreenController,
    loader: SourceLoader,
    key_bindings: KeyBindings,
    styles: ScreenStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Put the terminal in raw mode on the alternate screen and build the app.
    pub fn setup(
        controller: ScreenController,
        loader: SourceLoader,
        styles: ScreenStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::new(terminal, controller, loader, KeyBindings::default(), styles))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    pub fn new(
        terminal: Terminal<B>,
        controller: ScreenController,
        loader: SourceLoader,
        key_bindings: KeyBindings,
        styles: ScreenStyles,
    ) -> Self {
        Self {
            terminal,
            controller,
            loader,
            key_bindings,
            styles,
        }
    }

    pub fn controller(&self) -> &ScreenController {
        &self.controller
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Start a candidate load. Any load still in flight becomes stale.
    pub fn start_load(&mut self) {
        let ticket = self.controller.search_mut().begin_load();
        info!(ticket = ticket.get(), "loading candidates");
        self.loader.start(ticket);
    }

    /// Run the main event loop until the user quits.
    ///
    /// Redraws after every key or resize, and on ticks that delivered a load outcome.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "resize");
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.poll_loader() {
                self.draw()?;
            }
        }
    }

    /// Translate and route one key. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let context = KeyContext::for_screen(
            self.controller.focus(),
            self.controller.editing_endpoint().is_some(),
        );
        let Some(action) = self.key_bindings.get(key, context) else {
            return false;
        };

        match self.controller.apply(action) {
            ScreenEffect::None => false,
            ScreenEffect::Reload => {
                self.start_load();
                false
            }
            ScreenEffect::Quit => true,
        }
    }

    /// Apply every finished load. Returns true if the screen changed.
    pub fn poll_loader(&mut self) -> bool {
        let mut changed = false;
        while let Some(outcome) = self.loader.poll() {
            changed |= self
                .controller
                .search_mut()
                .finish_load(outcome.ticket, outcome.result);
        }
        changed
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let snapshot = self.controller.snapshot();
        let styles = self.styles;
        self.terminal.draw(|frame| {
            render_screen(frame, &snapshot, &styles);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Block until the in-flight load delivers, then apply it.
    pub(crate) fn settle_load(&mut self) -> bool {
        match self.loader.wait(Duration::from_secs(5)) {
            Some(outcome) => self
                .controller
                .search_mut()
                .finish_load(outcome.ticket, outcome.result),
            None => false,
        }
    }
}

/// Run the screen on the real terminal.
///
/// Starts the first load, runs the event loop and always restores the terminal.
/// Logging must be initialized by the caller.
pub fn run_screen(
    controller: ScreenController,
    loader: SourceLoader,
    styles: ScreenStyles,
) -> Result<(), TuiError> {
    let mut app = TuiApp::setup(controller, loader, styles)?;
    app.start_load();

    let result = app.run();

    restore_terminal()?;

    result
}

/// Disable raw mode and leave the alternate screen.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

//! TUI rendering and terminal management (impure shell)

mod catalog;
pub mod constants;
mod detail;
mod help;
mod helpers;
mod home;
mod layout;
mod news;
mod pages;
mod search_input;
pub mod styles;
#[cfg(test)]
mod test_support;

pub use help::{centered_rect, key_label, render_help_overlay};
pub use layout::{render_layout, APP_NAME};
pub use search_input::SearchBox;
pub use styles::{ColorConfig, Palette};

use crate::client::{FetchDispatcher, FetchJob, FetchWorker, NewsClient, ScholarshipClient};
use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction};
use crate::state::{search_input_handler, AppState, Resolution};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend and dispatcher so tests can drive it with `TestBackend` and a
/// `RecordingDispatcher`.
pub struct TuiApp<B, D>
where
    B: ratatui::backend::Backend,
    D: FetchDispatcher,
{
    terminal: Terminal<B>,
    app_state: AppState,
    dispatcher: D,
    key_bindings: KeyBindings,
    colors: ColorConfig,
}

impl<B, D> TuiApp<B, D>
where
    B: ratatui::backend::Backend,
    D: FetchDispatcher,
{
    /// Wrap an initial state and dispatch the jobs it asked for.
    pub fn new(
        terminal: Terminal<B>,
        app_state: AppState,
        initial_jobs: Vec<FetchJob>,
        dispatcher: D,
        key_bindings: KeyBindings,
        colors: ColorConfig,
    ) -> Self {
        let mut app = Self {
            terminal,
            app_state,
            dispatcher,
            key_bindings,
            colors,
        };
        app.dispatch_all(initial_jobs);
        app
    }

    /// The current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable access to the job dispatcher.
    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    /// Run the main event loop until the user quits.
    ///
    /// Polls the terminal with a short timeout so completed fetches are drawn promptly
    /// even when no key is pressed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let tick = Duration::from_millis(constants::TICK_MILLIS);
        self.draw()?;

        loop {
            if event::poll(tick)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(..) => self.draw()?,
                    _ => {}
                }
            }

            if self.poll_outcomes() {
                self.draw()?;
            }
        }
    }

    /// Render one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let palette = Palette::new(self.app_state.theme, self.colors);
        let state = &self.app_state;
        let bindings = &self.key_bindings;
        self.terminal
            .draw(|frame| render_layout(frame, state, bindings, palette))?;
        Ok(())
    }

    /// Apply every completed fetch. Returns true if anything arrived.
    pub fn poll_outcomes(&mut self) -> bool {
        let outcomes = self.dispatcher.drain();
        let any = !outcomes.is_empty();
        for outcome in outcomes {
            match self.app_state.apply_outcome(outcome) {
                Resolution::Applied => debug!("Fetch applied"),
                Resolution::Failed => warn!(
                    location = %self.app_state.location(),
                    "Fetch failed"
                ),
                Resolution::Stale => debug!("Discarded stale fetch result"),
            }
        }
        any
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Escape closes help overlay before anything else
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        if self.app_state.search_input.is_editing() && self.handle_search_key(key) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Help overlay blocks everything except closing it and quitting
        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        if action == KeyAction::Quit {
            return true;
        }

        let jobs = self.app_state.handle_action(action);
        self.dispatch_all(jobs);
        false
    }

    /// Keys consumed by the search box while editing. Returns true if consumed.
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        let input = std::mem::take(&mut self.app_state.search_input);
        let next = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::handle_char_input(input, ch)
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(input),
            KeyCode::Left => search_input_handler::handle_cursor_left(input),
            KeyCode::Right => search_input_handler::handle_cursor_right(input),
            KeyCode::Esc => search_input_handler::cancel_search_input(input),
            KeyCode::Enter => {
                let (next, submitted) = search_input_handler::submit_search_input(input);
                self.app_state.search_input = next;
                if let Some(text) = submitted {
                    info!(query = %text, "Search submitted");
                    let jobs = self.app_state.submit_search_text(&text);
                    self.dispatch_all(jobs);
                }
                return true;
            }
            _ => {
                self.app_state.search_input = input;
                return false;
            }
        };
        self.app_state.search_input = next;
        true
    }

    fn dispatch_all(&mut self, jobs: Vec<FetchJob>) {
        for job in jobs {
            self.dispatcher.dispatch(job);
        }
    }
}

/// Initialize the terminal, run the app against the configured backend, restore the
/// terminal.
///
/// Returns the location that was on screen at exit so the caller can print it.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(
    config: &ResolvedConfig,
    location: Option<&str>,
    colors: ColorConfig,
) -> Result<String, TuiError> {
    let scholarships = ScholarshipClient::new(config.api_url.as_str());
    let news = config.news_url.as_deref().map(NewsClient::new);
    let news_enabled = news.is_some();
    let worker = FetchWorker::new(scholarships, news)?;

    let (app_state, jobs) = AppState::new(location, config.theme, news_enabled);
    info!(location = %app_state.location(), "Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let terminal: Terminal<CrosstermBackend<Stdout>> = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = TuiApp::new(
        terminal,
        app_state,
        jobs,
        worker,
        KeyBindings::default(),
        colors,
    );

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    restore_terminal()?;
    result.map(|()| app.app_state().location())
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

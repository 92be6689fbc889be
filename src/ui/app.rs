//! Main TUI application state and logic

use crate::config;
use crate::playback::TickOutcome;
use crate::step::Algorithm;
use crate::store::{Action, Dispatched, Store};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::warn;

/// Longest the event loop waits for a key before checking the timer
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How much detail the panes show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Values and the step description only
    Simple,
    /// Adds indices, step kinds and complexity figures
    Technical,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Simple => ViewMode::Technical,
            ViewMode::Technical => ViewMode::Simple,
        }
    }

    pub fn is_technical(self) -> bool {
        self == ViewMode::Technical
    }
}

/// The main application state
pub struct App {
    pub store: Store,

    pub view_mode: ViewMode,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(store: Store) -> Self {
        let now = Instant::now();
        App {
            store,
            view_mode: ViewMode::Simple,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            match self.store.tick(now) {
                Ok(TickOutcome::Idle) => {}
                Ok(TickOutcome::Advanced) => {
                    self.status_message = "Playing...".to_string();
                }
                Ok(TickOutcome::Completed) => {
                    self.status_message = "Playback complete".to_string();
                }
                Err(e) => {
                    warn!(error = %e, "playback stopped");
                    self.status_message = format!("Error: {}", e);
                }
            }

            // Wake up in time for the next tick while playing
            let timeout = self
                .store
                .time_until_tick(Instant::now())
                .map_or(POLL_INTERVAL, |due| due.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Main area plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Catalog sidebar | visualization
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(main_chunks[0]);

        let description_height = if self.view_mode.is_technical() { 5 } else { 4 };
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(description_height)])
            .split(columns[1]);

        let algorithm = self.store.algorithm();
        let technical = self.view_mode.is_technical();

        super::panes::render_sidebar(frame, columns[0], algorithm, technical);

        let state = self.store.state();
        let current_step = self.store.current_step();
        match algorithm {
            Algorithm::Bst => {
                super::panes::render_tree_pane(frame, right_rows[0], state, current_step, technical);
            }
            Algorithm::Bfs | Algorithm::Dfs => {
                super::panes::render_graph_pane(
                    frame,
                    right_rows[0],
                    algorithm,
                    state,
                    current_step,
                );
            }
            _ => {
                super::panes::render_array_pane(frame, right_rows[0], algorithm, state, technical);
            }
        }

        super::panes::render_description_pane(
            frame,
            right_rows[1],
            super::panes::DescriptionRenderData {
                algorithm,
                position: self.store.position(),
                total_steps: self.store.step_count(),
                current_step,
                input: self.store.input(),
            },
            technical,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                position: self.store.position(),
                total_steps: self.store.step_count(),
                speed_ms: self.store.speed_ms(),
                is_playing: self.store.is_playing(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.apply(Action::Retreat, "Stepped backward", "Already at start");
            }
            KeyCode::Right => {
                self.apply(Action::Advance, "Stepped forward", "Already at end");
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    let was_playing = self.store.is_playing();
                    let (applied, ignored) = if was_playing {
                        ("Paused", "Paused")
                    } else {
                        ("Playing...", "Already at end; press ⌫ to restart")
                    };
                    self.apply(Action::TogglePlay, applied, ignored);
                }
            }
            KeyCode::Enter => {
                self.apply(Action::JumpToEnd, "Jumped to end", "Already at end");
            }
            KeyCode::Backspace => {
                self.apply(Action::JumpToStart, "Jumped to start", "Already at start");
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.apply(Action::Reset, "Reset to initial state", "Nothing to reset");
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let ignored = if self.store.is_playing() {
                    "Pause before shuffling"
                } else {
                    "Shuffle only applies to sorting algorithms"
                };
                self.apply(Action::Shuffle, "Input shuffled", ignored);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_speed(config::faster(self.store.speed_ms()));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.change_speed(config::slower(self.store.speed_ms()));
            }
            KeyCode::Tab | KeyCode::Down => {
                self.select(cycle(self.store.algorithm(), 1));
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.select(cycle(self.store.algorithm(), Algorithm::ALL.len() - 1));
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.view_mode = self.view_mode.toggle();
                self.status_message = match self.view_mode {
                    ViewMode::Simple => "Simple view".to_string(),
                    ViewMode::Technical => "Technical view".to_string(),
                };
            }
            _ => {}
        }
    }

    /// Dispatch an action and report the outcome in the status bar
    fn apply(&mut self, action: Action, applied: &str, ignored: &str) {
        self.status_message = match self.store.dispatch(action) {
            Ok(Dispatched::Applied) => applied.to_string(),
            Ok(Dispatched::Ignored) => ignored.to_string(),
            Err(e) => format!("Error: {}", e),
        };
    }

    fn change_speed(&mut self, speed_ms: u64) {
        let ms = i64::try_from(speed_ms).unwrap_or(i64::MAX);
        let message = format!("Speed: {} ms per step", speed_ms);
        self.apply(Action::SetSpeed(ms), &message, &message);
    }

    fn select(&mut self, algorithm: Algorithm) {
        let message = format!("Selected {}", algorithm.name());
        self.apply(Action::SelectAlgorithm(algorithm), &message, &message);
    }
}

/// The catalog entry `offset` places after `algorithm`, wrapping around
fn cycle(algorithm: Algorithm, offset: usize) -> Algorithm {
    let all = Algorithm::ALL;
    let index = all.iter().position(|&a| a == algorithm).unwrap_or(0);
    all[(index + offset) % all.len()]
}

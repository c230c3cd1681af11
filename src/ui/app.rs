//! Main TUI application state and logic

use crate::playback::{Controller, PlaybackState};
use crate::sorting::Algorithm;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest time the event loop blocks waiting for a key
const MAX_POLL: Duration = Duration::from_millis(50);

const MIN_SPEED_MS: u64 = 10;
const MAX_SPEED_MS: u64 = 2000;
const SPEED_STEP_MS: u64 = 50;
const MAX_LIST_LENGTH: usize = 40;

/// The main application state
pub struct App {
    /// The playback controller driving the visualization
    pub controller: Controller,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        App {
            controller,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Wake up in time for the next scheduled auto-advance
            let timeout = self
                .controller
                .next_tick_due()
                .map(|due| due.saturating_duration_since(Instant::now()).min(MAX_POLL))
                .unwrap_or(MAX_POLL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            if self.controller.tick(Instant::now()) && self.controller.is_complete() {
                self.status_message = "Sorted!".to_string();
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Bars on top, legend, then progress + step log, status bar at the bottom
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(1),
                Constraint::Length(10),
                Constraint::Length(1),
            ])
            .split(size);

        let controller = &self.controller;
        super::panes::render_bars_pane(
            frame,
            rows[0],
            controller.algorithm().label(),
            controller.values(),
            controller.current(),
        );
        super::panes::render_legend(frame, rows[1], controller.algorithm());
        super::panes::render_steps_pane(
            frame,
            rows[2],
            controller.progress(),
            controller.recent_descriptions(),
        );
        super::panes::render_status_bar(
            frame,
            rows[3],
            super::panes::StatusRenderData {
                message: &self.status_message,
                cursor: controller.cursor(),
                total_steps: controller.history_len(),
                state: controller.state(),
                speed_ms: controller.speed().as_millis(),
                memory_bytes: controller.history().memory_usage(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Right => {
                self.controller.step();
                self.status_message = if self.controller.is_complete() {
                    "Sorted!".to_string()
                } else {
                    "Stepped forward".to_string()
                };
            }
            KeyCode::Left => {
                if self.controller.can_step_back() {
                    self.controller.step_back();
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.controller.stop();
                    self.status_message = "At the first step".to_string();
                }
            }
            KeyCode::Enter => {
                // Jump to end of the run
                self.controller.stop();
                if !self.controller.values().is_empty() {
                    while !self.controller.is_complete() {
                        self.controller.step();
                    }
                }
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Jump to the first step
                self.controller.stop();
                while self.controller.can_step_back() {
                    self.controller.step_back();
                }
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
                self.status_message = "Shuffled".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let ms = self.current_speed_ms().saturating_sub(SPEED_STEP_MS);
                self.set_speed(ms);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let ms = self.current_speed_ms() + SPEED_STEP_MS;
                self.set_speed(ms);
            }
            KeyCode::Char(']') => {
                let len = self.controller.values().len();
                if len >= MAX_LIST_LENGTH {
                    self.status_message = format!("List length is already {}", len);
                } else {
                    self.controller.set_list_length(len + 1);
                    self.status_message = format!("List length {}", len + 1);
                }
            }
            KeyCode::Char('[') => {
                let len = self.controller.values().len().saturating_sub(1);
                self.controller.set_list_length(len);
                self.status_message = format!("List length {}", len);
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                let algorithm = Algorithm::ALL[index];
                self.controller.set_algorithm(algorithm);
                self.status_message = format!("Selected {}", algorithm.label());
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.controller.is_playing() {
            self.controller.stop();
            self.status_message = "Paused".to_string();
            return;
        }
        if self.controller.values().is_empty() {
            self.status_message = "Nothing to sort".to_string();
            return;
        }
        let restarting = self.controller.state() == PlaybackState::Complete;
        self.controller.start();
        self.status_message = if restarting {
            "Reshuffled and playing...".to_string()
        } else {
            "Playing...".to_string()
        };
    }

    fn current_speed_ms(&self) -> u64 {
        self.controller.speed().as_millis() as u64
    }

    fn set_speed(&mut self, ms: u64) {
        let ms = ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS);
        self.controller.set_speed(ms);
        self.status_message = format!("Speed {} ms/step", ms);
        debug!(ms, "speed adjusted from keyboard");
    }
}

//! Application state and event handling

mod actions;
mod config;
mod state;

pub use actions::{action_for_key, hints, Action};
pub use config::{ConfigError, TuiConfig};
pub use state::{AppState, CardControl};

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use crate::ui;

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter
    pub tick: u64,

    /// Tick interval
    tick_rate: Duration,

    /// Last tick time
    last_tick: Instant,
}

impl App {
    /// Create a new application instance from configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let state = AppState::from_config(config)?.persist_to(TuiConfig::config_file_path());
        tracing::info!(device = %config.device_name, "Thermostat card ready");

        Ok(Self {
            state,
            should_quit: false,
            tick: 0,
            tick_rate: config.tick_rate(),
            last_tick: Instant::now(),
        })
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.state.tick();
                self.tick = self.tick.wrapping_add(1);
                self.last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyCode) {
        match action_for_key(key, self.state.keypad_open()) {
            Some(Action::Quit) => self.should_quit = true,
            Some(action) => self.state.apply(action),
            None => {}
        }
    }
}

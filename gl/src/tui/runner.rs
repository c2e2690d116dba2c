//! TUI Runner - main loop that owns the terminal
//!
//! The TuiRunner is responsible for:
//! - Drawing the screen after every handled event
//! - Dispatching events to App for handling, one at a time

use eyre::Result;
use tracing::{debug, info, trace};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;
use crate::config::Config;

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Event handler
    event_handler: EventHandler,
}

impl TuiRunner {
    /// Create a new TuiRunner for a freshly mounted screen
    pub fn new(terminal: Tui, config: &Config) -> Self {
        debug!(?config, "TuiRunner::new: called");
        Self {
            app: App::from_config(config),
            terminal,
            event_handler: EventHandler::new(config.tick_rate()),
        }
    }

    /// Run the main loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        info!("TuiRunner::run: screen mounted");
        loop {
            self.terminal.draw(|frame| views::render(self.app.state_mut(), frame))?;

            match self.event_handler.next().await? {
                Event::Tick => self.app.tick(),
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => self.app.handle_mouse(mouse),
                Event::Paste(text) => self.app.handle_paste(&text),
                Event::Resize(width, height) => {
                    trace!(width, height, "TuiRunner::run: resize, redrawing");
                }
            }

            if self.app.state().should_quit {
                debug!("TuiRunner::run: should_quit is true, breaking");
                break;
            }
        }

        info!(goals = self.app.state().goals.len(), "TuiRunner::run: screen unmounted");
        Ok(())
    }
}

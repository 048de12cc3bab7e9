//! Main app structure

mod state;

pub use state::{AppState, Focus};

use crate::render::{self, RenderConfig};
use anyhow::Result;
use cw_core::CommentWidget;
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info};

/// Main application
pub struct App {
    /// Application state
    pub state: AppState,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Rendering settings
    config: RenderConfig,
    /// Input poll interval
    tick_rate: Duration,
}

impl App {
    /// Take over the terminal and wrap `widget`
    pub fn new(widget: CommentWidget, config: RenderConfig) -> Result<Self> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        info!("Started UI as @{}", widget.current_user().username);

        Ok(Self {
            state: AppState::new(widget),
            terminal,
            config,
            tick_rate: Duration::from_millis(100),
        })
    }

    /// Set the input poll interval
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            if event::poll(self.tick_rate)? {
                match event::read()? {
                    // Windows reports releases too
                    event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.state.handle_key(key);
                    }
                    event::Event::Resize(width, height) => {
                        debug!("Resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        info!("UI closed");
        Ok(())
    }

    /// The widget in its current state
    pub fn widget(&self) -> &CommentWidget {
        &self.state.widget
    }

    fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        let config = &self.config;
        self.terminal
            .draw(|frame| render::draw(frame, state, config))?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

//! Main TUI application loop.
//!
//! Handles:
//! - Domain selection
//! - Field editing and focus
//! - Synchronous predict-and-report on submit

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::adapters::linear::load_models;
use crate::application::{ModelRegistry, Session};
use crate::config::AppConfig;
use crate::domain::Disease;

use super::ui::{form::render_form, render_disclaimer, render_selector, render_title};

/// Main application state
pub struct App {
    /// Loaded once, never mutated
    models: Arc<ModelRegistry>,

    /// Current domain and its form
    session: Session,

    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    /// Create the application, loading all models from the configured directory.
    ///
    /// # Errors
    /// Returns error if the model directory is missing or any model fails to load.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let model_dir = config.model_dir.as_path();
        if !model_dir.is_dir() {
            return Err(anyhow!(
                "Model directory not found at {:?}. Set MEDPREDICT_MODEL_DIR to the directory holding the model files.",
                model_dir
            ));
        }

        let loaded = load_models(model_dir, config.require_manifest)
            .map_err(|e| anyhow!("Failed to load models from {:?}: {}", model_dir, e))?;
        let models = ModelRegistry::new(
            Arc::new(loaded.diabetes),
            Arc::new(loaded.heart_disease),
            Arc::new(loaded.parkinsons),
        )?;

        Ok(Self::with_models(Arc::new(models)))
    }

    /// Create the application around an already loaded registry.
    #[must_use]
    pub fn with_models(models: Arc<ModelRegistry>) -> Self {
        Self {
            models,
            session: Session::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports releases too.
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(2), // Domain selector
                Constraint::Min(0),    // Form
                Constraint::Length(2), // Disclaimer
            ])
            .split(f.area());

        render_title(f, chunks[0]);
        render_selector(f, chunks[1], self.session.disease());
        render_form(f, chunks[2], &self.session);
        render_disclaimer(f, chunks[3]);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Left => self.session.select_prev(),
            KeyCode::Right => self.session.select_next(),
            KeyCode::F(1) => self.session.select(Disease::Diabetes),
            KeyCode::F(2) => self.session.select(Disease::HeartDisease),
            KeyCode::F(3) => self.session.select(Disease::Parkinsons),
            KeyCode::Up | KeyCode::BackTab => self.session.focus_prev(),
            KeyCode::Down | KeyCode::Tab => self.session.focus_next(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.session.load_sample(),
            KeyCode::Char(c) => self.session.input_char(c),
            KeyCode::Backspace => self.session.delete_char(),
            KeyCode::Delete => self.session.clear_field(),
            KeyCode::Enter => {
                // Outcome is already on the banner.
                let _ = self.session.submit(&self.models);
            }
            _ => {}
        }
    }
}

//! TUI application state and frame loop

use super::input::{KeyAction, map_key};
use crate::game::{GameEngine, InputEvent, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Target time between frames, about 60 FPS
pub const FRAME_BUDGET: Duration = Duration::from_micros(16_667);

/// Application state
pub struct App<'a> {
    pub engine: GameEngine<'a>,
    pub stats: Statistics,
    pub should_quit: bool,
    pending: Vec<InputEvent>,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: GameEngine<'a>) -> Self {
        let stats = Statistics::new(engine.config().max_guesses);
        Self {
            engine,
            stats,
            should_quit: false,
            pending: Vec::new(),
        }
    }

    /// Queue a key press for the next frame
    pub fn handle_key(&mut self, key: KeyEvent) {
        match map_key(key) {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Game(event) => self.pending.push(event),
            KeyAction::Nothing => {}
        }
    }

    /// Advance the engine by `dt` seconds with the queued input
    pub fn update(&mut self, dt: f32) {
        let events = std::mem::take(&mut self.pending);
        if let Some(outcome) = self.engine.tick(events, dt) {
            self.stats.record(outcome);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(stats) => {
            info!(
                played = stats.games_played,
                won = stats.games_won,
                "interactive session closed"
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(())
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wait for input until the frame is due, then drain whatever else arrived
        let timeout = FRAME_BUDGET.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(app.stats);
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= FRAME_BUDGET {
            last_frame = Instant::now();
            app.update(elapsed.as_secs_f32());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Word;
    use crate::game::Outcome;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn keys_drive_engine_and_record_stats() {
        let dictionary =
            Dictionary::new(words_from_slice(&["crane", "slate"]), Vec::new()).unwrap();
        let engine = GameEngine::with_secret(
            &dictionary,
            GameConfig::default().with_seed(Some(1)),
            Word::new("crane").unwrap(),
        );
        let mut app = App::new(engine);

        for c in "crane".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        for _ in 0..90 {
            app.update(1.0 / 60.0);
        }

        assert_eq!(app.engine.outcome(), Some(Outcome::Won { guesses: 1 }));
        assert_eq!(app.stats.games_won, 1);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}

//! Session state machine
//!
//! The engine owns the grid, the cursor and the session outcome. Input is
//! accepted only while no row is revealing; per-tile animations advance on
//! every tick regardless and gate the turn through [`GameEngine::is_revealing`].

use super::event::{InputEvent, Transition};
use super::keyboard::KeyboardState;
use super::row::{RowPhase, RowState};
use super::snapshot::{CellSnapshot, EngineSnapshot};
use crate::config::GameConfig;
use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Message shown when a submitted word is not accepted
pub const NOT_IN_WORD_LIST: &str = "Not in word list";

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { guesses: usize },
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Over(Outcome),
}

#[derive(Debug, Clone, PartialEq)]
struct Notification {
    text: String,
    remaining: f32,
}

/// One game session, reusable across restarts
#[derive(Debug)]
pub struct GameEngine<'a> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    rng: StdRng,
    secret: Word,
    rows: Vec<RowState>,
    cursor_row: usize,
    cursor_column: usize,
    status: GameStatus,
    notification: Option<Notification>,
    keyboard: KeyboardState,
}

impl<'a> GameEngine<'a> {
    /// Start a session with a secret drawn from `dictionary`
    ///
    /// The draw is reproducible when `config.seed` is set.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: GameConfig) -> Self {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let secret = dictionary.random_word(&mut rng).clone();
        Self::build(dictionary, config, rng, secret)
    }

    /// Start a session with a known secret
    ///
    /// Later restarts still draw from the dictionary.
    #[must_use]
    pub fn with_secret(dictionary: &'a Dictionary, config: GameConfig, secret: Word) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::build(dictionary, config, rng, secret)
    }

    fn build(dictionary: &'a Dictionary, config: GameConfig, rng: StdRng, secret: Word) -> Self {
        let config = config.with_max_guesses(config.max_guesses);
        info!(max_guesses = config.max_guesses, "session started");
        Self {
            dictionary,
            rows: (0..config.max_guesses)
                .map(|_| RowState::new(config.animation))
                .collect(),
            config,
            rng,
            secret,
            cursor_row: 0,
            cursor_column: 0,
            status: GameStatus::Playing,
            notification: None,
            keyboard: KeyboardState::default(),
        }
    }

    /// Advance one frame: apply `events`, run animations, settle reveals
    ///
    /// `dt` is clamped to `[0, max_frame_step]`. Returns the outcome if the
    /// session finished during this tick.
    pub fn tick<I>(&mut self, events: I, dt: f32) -> Option<Outcome>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle_event(event);
        }

        let step = dt.clamp(0.0, self.config.max_frame_step);
        self.advance(step);
        self.resolve_reveal()
    }

    /// Apply one input event to the turn state machine
    pub fn handle_event(&mut self, event: InputEvent) -> Transition {
        if self.is_over() {
            self.restart();
            return Transition::Restarted;
        }
        if self.is_revealing() {
            debug!(?event, "input dropped during reveal");
            return Transition::Dropped;
        }

        match event {
            InputEvent::Letter(c) => self.type_letter(c),
            InputEvent::Backspace => self.erase_letter(),
            InputEvent::Submit => self.submit(),
            InputEvent::AnyKey => Transition::Ignored,
        }
    }

    fn type_letter(&mut self, c: char) -> Transition {
        if !c.is_ascii_alphabetic() || self.cursor_column >= WORD_LENGTH {
            return Transition::Ignored;
        }

        let (row, column) = (self.cursor_row, self.cursor_column);
        self.rows[row].put_letter(column, c.to_ascii_lowercase() as u8);
        self.cursor_column += 1;
        debug!(row, column, letter = %c.to_ascii_lowercase(), "letter typed");
        Transition::Typed { row, column }
    }

    fn erase_letter(&mut self) -> Transition {
        if self.cursor_column == 0 {
            return Transition::Ignored;
        }

        self.cursor_column -= 1;
        let (row, column) = (self.cursor_row, self.cursor_column);
        self.rows[row].clear_letter(column);
        Transition::Erased { row, column }
    }

    fn submit(&mut self) -> Transition {
        if self.cursor_column != WORD_LENGTH {
            return Transition::Ignored;
        }

        let row = self.cursor_row;
        let Some(guess) = self.rows[row].word() else {
            return Transition::Ignored;
        };

        if let Err(err) = self.dictionary.check(&guess) {
            debug!(row, %err, "guess rejected");
            self.rows[row].shake();
            self.notify(NOT_IN_WORD_LIST);
            return Transition::Rejected { row };
        }

        let feedback = Feedback::calculate(&guess, &self.secret);
        debug!(row, guess = %guess, feedback = %feedback, "guess submitted");
        self.rows[row].reveal(feedback, self.config.animation.flip_stagger);
        Transition::Submitted { row, feedback }
    }

    fn notify(&mut self, text: &str) {
        self.notification = Some(Notification {
            text: text.to_string(),
            remaining: self.config.notification_duration,
        });
    }

    fn advance(&mut self, dt: f32) {
        for row in &mut self.rows {
            row.advance(dt);
        }

        if let Some(notification) = &mut self.notification {
            notification.remaining -= dt;
            if notification.remaining <= 0.0 {
                self.notification = None;
            }
        }
    }

    /// Accept the current row once every flip has landed
    fn resolve_reveal(&mut self) -> Option<Outcome> {
        let row = self.cursor_row;
        let current = &mut self.rows[row];
        if !current.is_evaluating() || current.is_flipping() {
            return None;
        }

        current.accept();
        let (Some(guess), Some(feedback)) = (current.word(), current.feedback()) else {
            return None;
        };
        self.keyboard.record_guess(&guess, &feedback);

        if feedback.is_solved() {
            let outcome = Outcome::Won { guesses: row + 1 };
            info!(guesses = row + 1, secret = %self.secret, "game won");
            self.status = GameStatus::Over(outcome);
            return Some(outcome);
        }

        if row + 1 >= self.rows.len() {
            info!(secret = %self.secret, "game lost");
            self.status = GameStatus::Over(Outcome::Lost);
            return Some(Outcome::Lost);
        }

        self.cursor_row += 1;
        self.cursor_column = 0;
        None
    }

    /// Replace the session: new secret, blank grid, cleared keyboard
    pub fn restart(&mut self) {
        self.secret = self.dictionary.random_word(&mut self.rng).clone();
        for row in &mut self.rows {
            row.reset();
        }
        self.cursor_row = 0;
        self.cursor_column = 0;
        self.status = GameStatus::Playing;
        self.notification = None;
        self.keyboard.clear();
        info!("session restarted");
    }

    /// Whether a submitted row is still revealing
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.rows.iter().any(RowState::is_evaluating)
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Over(outcome) => Some(outcome),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn rows(&self) -> &[RowState] {
        &self.rows
    }

    /// Snapshot of the cell at `row`, `column`
    ///
    /// # Panics
    /// Panics if either index is out of the grid.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> CellSnapshot {
        CellSnapshot::from(&self.rows[row].cells()[column])
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    #[must_use]
    pub const fn cursor_column(&self) -> usize {
        self.cursor_column
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_ref().map(|n| n.text.as_str())
    }

    /// Feedback of every accepted row, in order
    pub fn history(&self) -> impl Iterator<Item = (Word, Feedback)> + '_ {
        self.rows
            .iter()
            .filter(|row| row.phase() == RowPhase::Accepted)
            .filter_map(|row| Some((row.word()?, row.feedback()?)))
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            cursor_row: self.cursor_row,
            cursor_column: self.cursor_column,
            status: self.status,
            notification: self.notification().map(str::to_string),
            revealing: self.is_revealing(),
        }
    }

    /// End-of-game banner text, once the session is over
    #[must_use]
    pub fn outcome_message(&self) -> Option<String> {
        let secret = self.secret.text().to_uppercase();
        match self.outcome()? {
            Outcome::Won { .. } => Some(format!("You got it! The word was {secret}")),
            Outcome::Lost => Some(format!("So close! The word was: {secret}")),
        }
    }
}

//! Headless simulation
//!
//! Plays many sessions through the real engine, input events and fixed-step
//! ticks included, with a bot that always guesses a word still consistent
//! with the feedback so far.

use crate::config::GameConfig;
use crate::core::{Feedback, Word};
use crate::game::{GameEngine, InputEvent, Outcome, Statistics};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::iter;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Fixed frame step used for headless sessions
pub const SIMULATION_FRAME: f32 = 1.0 / 60.0;

/// Frames after which a stuck session is abandoned
const MAX_FRAMES: usize = 100_000;

/// Result of one simulated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: String,
    pub guesses: Vec<String>,
    pub outcome: Outcome,
    /// Ticks the session took, reveals included
    pub frames: usize,
}

/// Aggregate of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub records: Vec<GameRecord>,
    pub stats: Statistics,
    pub duration: Duration,
    pub games_per_second: f64,
    /// Mean simulated seconds per session
    pub average_game_time: f64,
}

impl SimulationResult {
    /// Lost sessions, by secret
    pub fn losses(&self) -> impl Iterator<Item = &GameRecord> {
        self.records
            .iter()
            .filter(|record| record.outcome == Outcome::Lost)
    }
}

/// Guesses the first answer consistent with every observed feedback
#[derive(Debug, Clone)]
pub struct ConsistentBot<'a> {
    candidates: Vec<&'a Word>,
}

impl<'a> ConsistentBot<'a> {
    #[must_use]
    pub fn new(answers: &'a [Word]) -> Self {
        Self {
            candidates: answers.iter().collect(),
        }
    }

    #[must_use]
    pub fn next_guess(&self) -> Option<&'a Word> {
        self.candidates.first().copied()
    }

    /// Drop every candidate that would not have produced `feedback`
    pub fn observe(&mut self, guess: &Word, feedback: Feedback) {
        self.candidates
            .retain(|&candidate| Feedback::calculate(guess, candidate) == feedback);
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }
}

/// Play one session against `secret`
#[must_use]
pub fn play_session(dictionary: &Dictionary, config: GameConfig, secret: &Word) -> GameRecord {
    let mut engine = GameEngine::with_secret(dictionary, config, secret.clone());
    let mut bot = ConsistentBot::new(dictionary.answers());
    let mut guesses = Vec::new();
    let mut frames = 0;

    let outcome = 'session: loop {
        let Some(guess) = bot.next_guess() else {
            break Outcome::Lost;
        };
        guesses.push(guess.text().to_string());

        let events = guess
            .text()
            .chars()
            .map(InputEvent::Letter)
            .chain(iter::once(InputEvent::Submit));
        let mut finished = engine.tick(events, SIMULATION_FRAME);
        frames += 1;

        while finished.is_none() && engine.is_revealing() {
            if frames >= MAX_FRAMES {
                break 'session Outcome::Lost;
            }
            finished = engine.tick(iter::empty(), SIMULATION_FRAME);
            frames += 1;
        }

        if let Some(outcome) = finished {
            break outcome;
        }

        match engine.history().last() {
            Some((word, feedback)) if word == *guess => bot.observe(&word, feedback),
            // The guess never reached the grid
            _ => break Outcome::Lost,
        }
    };

    debug!(
        secret = %secret,
        guesses = guesses.len(),
        remaining = bot.remaining(),
        ?outcome,
        "session finished"
    );

    GameRecord {
        secret: secret.text().to_string(),
        guesses,
        outcome,
        frames,
    }
}

/// Draw `games` secrets; reproducible when `seed` is set
fn draw_secrets(dictionary: &Dictionary, seed: Option<u64>, games: usize) -> Vec<&Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..games)
        .filter_map(|_| dictionary.answers().choose(&mut rng))
        .collect()
}

/// Run `games` independent sessions in parallel
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
#[must_use]
pub fn run_simulation(dictionary: &Dictionary, config: GameConfig, games: usize) -> SimulationResult {
    let secrets = draw_secrets(dictionary, config.seed, games);
    info!(games = secrets.len(), "simulation started");

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let records: Vec<GameRecord> = secrets
        .par_iter()
        .map(|secret| {
            let record = play_session(dictionary, config, secret);
            pb.inc(1);
            record
        })
        .collect();
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut stats = Statistics::new(config.max_guesses);
    for record in &records {
        stats.record(record.outcome);
    }

    let total_frames: usize = records.iter().map(|r| r.frames).sum();
    let average_game_time = if records.is_empty() {
        0.0
    } else {
        total_frames as f64 * f64::from(SIMULATION_FRAME) / records.len() as f64
    };

    info!(
        played = stats.games_played,
        won = stats.games_won,
        elapsed_ms = duration.as_millis() as u64,
        "simulation finished"
    );

    SimulationResult {
        games_per_second: records.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
        records,
        stats,
        duration,
        average_game_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;
    use crate::wordlists::loader::words_from_slice;

    /// Fewest ticks one accepted row can take
    fn min_reveal_frames(config: &GameConfig) -> usize {
        let animation = &config.animation;
        let seconds =
            (WORD_LENGTH - 1) as f32 * animation.flip_stagger + animation.flip_duration();
        (seconds / SIMULATION_FRAME).ceil() as usize
    }

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["crane", "trace", "slate", "irate", "grate"]),
            words_from_slice(&["llama"]),
        )
        .unwrap()
    }

    #[test]
    fn bot_narrows_candidates() {
        let dictionary = dictionary();
        let mut bot = ConsistentBot::new(dictionary.answers());
        let guess = Word::new("crane").unwrap();
        let secret = Word::new("grate").unwrap();

        bot.observe(&guess, Feedback::calculate(&guess, &secret));
        assert!(bot.remaining() < dictionary.answers().len());
        assert!(bot.remaining() >= 1);
        assert_ne!(bot.next_guess().map(Word::text), Some("crane"));
    }

    #[test]
    fn session_wins_through_engine() {
        let dictionary = dictionary();
        let config = GameConfig::default();
        let secret = Word::new("grate").unwrap();

        let record = play_session(&dictionary, config, &secret);
        assert!(matches!(record.outcome, Outcome::Won { .. }));
        assert_eq!(record.guesses.last().map(String::as_str), Some("grate"));
        if let Outcome::Won { guesses } = record.outcome {
            assert_eq!(guesses, record.guesses.len());
        }
        // Every accepted row waits for its full reveal
        assert!(record.frames >= record.guesses.len() * min_reveal_frames(&config));
    }

    #[test]
    fn first_answer_wins_immediately() {
        let dictionary = dictionary();
        let record = play_session(&dictionary, GameConfig::default(), &Word::new("crane").unwrap());
        assert_eq!(record.outcome, Outcome::Won { guesses: 1 });
    }

    #[test]
    fn simulation_aggregates_games() {
        let dictionary = dictionary();
        let config = GameConfig::default().with_seed(Some(3));
        let result = run_simulation(&dictionary, config, 12);

        assert_eq!(result.records.len(), 12);
        assert_eq!(result.stats.games_played, 12);
        assert_eq!(result.stats.games_won, 12);
        assert_eq!(result.losses().count(), 0);
        assert_eq!(result.stats.guess_distribution.iter().sum::<usize>(), 12);
        assert!(result.average_game_time > 0.0);
    }

    #[test]
    fn seeded_simulation_is_reproducible() {
        let dictionary = dictionary();
        let config = GameConfig::default().with_seed(Some(11));
        let a = run_simulation(&dictionary, config, 8);
        let b = run_simulation(&dictionary, config, 8);
        assert_eq!(a.records, b.records);
    }

    #[test]
    fn tight_guess_limit_can_lose() {
        let dictionary = dictionary();
        let config = GameConfig::default().with_max_guesses(1);
        let record = play_session(&dictionary, config, &Word::new("irate").unwrap());
        assert_eq!(record.outcome, Outcome::Lost);
        assert_eq!(record.guesses.len(), 1);
    }
}

//! Command implementations

pub mod score;
pub mod simulate;

pub use score::{ScoreResult, score_guess};
pub use simulate::{ConsistentBot, GameRecord, SimulationResult, play_session, run_simulation};

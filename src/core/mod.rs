//! Core domain types for the game
//!
//! This module contains the fundamental domain types: words, per-letter
//! classifications and the feedback evaluator. Everything here is pure and
//! independent of timing or presentation.

mod classification;
mod feedback;
mod word;

pub use classification::Classification;
pub use feedback::{Feedback, evaluate};
pub(crate) use feedback::parse_argument;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

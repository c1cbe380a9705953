//! Score command
//!
//! Evaluates a single guess against a secret.

use crate::core::{Classification, Feedback, Word, parse_argument};
use crate::error::Result;

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

impl ScoreResult {
    /// Letters of the guess paired with their classification
    pub fn tiles(&self) -> impl Iterator<Item = (char, Classification)> + '_ {
        self.guess
            .chars()
            .iter()
            .map(|&b| char::from(b))
            .zip(self.feedback.classes().iter().copied())
    }
}

/// Score `guess` against `secret`
///
/// Dictionary membership is not checked; any well-formed word can be scored.
///
/// # Errors
/// Returns `GameError::InvalidArgument` if either word is malformed.
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult> {
    let guess = parse_argument(guess, "guess")?;
    let secret = parse_argument(secret, "secret")?;
    let feedback = Feedback::calculate(&guess, &secret);

    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}

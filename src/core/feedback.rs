//! Letter feedback for a guess
//!
//! Feedback classifies every position of a guess as `Correct`, `Present` or
//! `Absent`. Duplicate letters are budgeted against the secret word: exact
//! matches claim their occurrences first, displaced matches share what is left.

use super::{Classification, WORD_LENGTH, Word};
use crate::error::{GameError, Result};
use std::fmt;
use std::str::FromStr;

/// Per-position classification of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const SOLVED: Self = Self([Classification::Correct; WORD_LENGTH]);

    /// Wrap an explicit classification array
    #[must_use]
    pub const fn new(classes: [Classification; WORD_LENGTH]) -> Self {
        Self(classes)
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. Count every letter of the secret
    /// 2. First pass: mark exact matches `Correct` and consume their letter
    /// 3. Second pass: mark remaining positions `Present` while budget for the
    ///    letter is left, otherwise `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_tiles::core::{Classification::*, Feedback, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let secret = Word::new("allow").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.classes(), &[Present, Correct, Present, Absent, Absent]);
    /// ```
    #[must_use]
    // Allow: index needed to compare guess[i], secret[i] and set result[i]
    #[allow(clippy::needless_range_loop)]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [Classification::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();
        let guess = guess.chars();
        let secret = secret.chars();

        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                result[i] = Classification::Correct;
                if let Some(count) = available.get_mut(&guess[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for i in 0..WORD_LENGTH {
            if result[i] == Classification::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess[i])
                && *count > 0
            {
                result[i] = Classification::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Classifications in guess order
    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    /// Classification at one position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Classification {
        self.0[position]
    }

    /// Check whether every position is `Correct`
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of positions with the given classification
    #[must_use]
    pub fn count(&self, class: Classification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Convert feedback to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.0 {
            write!(f, "{}", class.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse feedback written as "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let classes: Vec<Classification> = s
            .chars()
            .map(Classification::from_symbol)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        classes
            .try_into()
            .map(Self::new)
            .map_err(|_| format!("Feedback must have {WORD_LENGTH} positions: {s}"))
    }
}

/// Evaluate a raw guess against a raw secret
///
/// Both inputs are normalized to lowercase before comparison.
///
/// # Errors
/// Returns `GameError::InvalidArgument` if either input is not exactly
/// `WORD_LENGTH` ASCII letters.
///
/// # Examples
/// ```
/// use wordle_tiles::core::evaluate;
///
/// let feedback = evaluate("TRACE", "crane").unwrap();
/// assert_eq!(feedback.to_string(), "-GGYG");
///
/// assert!(evaluate("trace", "cranes").is_err());
/// ```
pub fn evaluate(guess: &str, secret: &str) -> Result<Feedback> {
    let guess = parse_argument(guess, "guess")?;
    let secret = parse_argument(secret, "secret")?;
    Ok(Feedback::calculate(&guess, &secret))
}

/// Parse evaluator input, tagging failures with the argument's role
pub(crate) fn parse_argument(text: &str, role: &'static str) -> Result<Word> {
    Word::new(text).map_err(|source| GameError::InvalidArgument { role, source })
}

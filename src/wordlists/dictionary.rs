//! Accepted guesses and drawable secrets

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use crate::error::{DictionaryError, GameError, Result};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Read-only word data injected into every game session
///
/// Secrets are drawn from the answer list; guesses are accepted if they are
/// an answer or one of the additional allowed words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    accepted: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from an answer list and extra accepted guesses
    ///
    /// # Errors
    /// Returns `DictionaryError::NoAnswers` if `answers` is empty.
    pub fn new(
        answers: Vec<Word>,
        allowed: impl IntoIterator<Item = Word>,
    ) -> std::result::Result<Self, DictionaryError> {
        if answers.is_empty() {
            return Err(DictionaryError::NoAnswers);
        }

        let mut accepted: FxHashSet<Word> = allowed.into_iter().collect();
        accepted.extend(answers.iter().cloned());

        Ok(Self { answers, accepted })
    }

    /// Use one list both as answers and as accepted guesses
    ///
    /// # Errors
    /// Returns `DictionaryError::NoValidWords` if `words` is empty.
    pub fn from_words(words: Vec<Word>) -> std::result::Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::NoValidWords);
        }
        Self::new(words, std::iter::empty())
    }

    /// Dictionary built from the word lists compiled into the binary
    ///
    /// # Errors
    /// Returns an error only if the embedded answer list is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_tiles::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded().unwrap();
    /// assert!(dictionary.contains_str("crane"));
    /// assert!(!dictionary.contains_str("qzxvj"));
    /// ```
    pub fn embedded() -> std::result::Result<Self, DictionaryError> {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    /// Membership test for raw text, case-insensitive
    #[must_use]
    pub fn contains_str(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|word| self.contains(&word))
    }

    /// Validate a guess against the dictionary
    ///
    /// # Errors
    /// Returns `GameError::RejectedGuess` if the word is unknown.
    pub fn check(&self, word: &Word) -> Result<()> {
        if self.contains(word) {
            Ok(())
        } else {
            Err(GameError::RejectedGuess(word.text().to_string()))
        }
    }

    /// Draw a secret word uniformly from the answer list
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Construction guarantees at least one answer
        &self.answers[rng.random_range(0..self.answers.len())]
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

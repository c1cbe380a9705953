//! Error types for the game engine

use crate::core::{WORD_LENGTH, WordError};
use thiserror::Error;

/// Errors raised by the game core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A guess or secret handed to the evaluator is malformed
    #[error("invalid {role}: {source}")]
    InvalidArgument {
        role: &'static str,
        #[source]
        source: WordError,
    },
    /// A well-formed guess that the dictionary does not know
    #[error("'{0}' is not in the word list")]
    RejectedGuess(String),
}

/// Errors raised while assembling a dictionary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("answer list is empty, no secret word can be drawn")]
    NoAnswers,
    #[error("word list contains no valid {len} letter words", len = WORD_LENGTH)]
    NoValidWords,
}

pub type Result<T> = core::result::Result<T, GameError>;

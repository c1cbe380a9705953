//! Input consumed by the engine and the transitions it reports

use crate::core::Feedback;

/// A discrete input event delivered by the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A character key; non-letters are ignored while playing
    Letter(char),
    Backspace,
    Submit,
    /// Any other key; only meaningful once the game is over
    AnyKey,
}

/// What handling one input event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A letter was written into the current row
    Typed { row: usize, column: usize },
    /// The last letter of the current row was cleared
    Erased { row: usize, column: usize },
    /// The guess was not in the dictionary; the row shakes and stays open
    Rejected { row: usize },
    /// The guess was accepted and its reveal has started
    Submitted { row: usize, feedback: Feedback },
    /// A finished session was replaced by a new one
    Restarted,
    /// Input arrived during a reveal and was dropped
    Dropped,
    /// Input had no effect in the current state
    Ignored,
}

//! One attempt on the grid
//!
//! A row holds `WORD_LENGTH` cells and moves through
//! `Entering -> Evaluating -> Accepted`. Once evaluated its letters and
//! classifications are fixed; only animation progress continues.

use crate::animation::TileAnimator;
use crate::config::AnimationConfig;
use crate::core::{Classification, Feedback, WORD_LENGTH, Word};

/// Phase of a row in the turn state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPhase {
    #[default]
    Entering,
    Evaluating,
    Accepted,
}

/// One grid cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    letter: Option<u8>,
    classification: Option<Classification>,
    animator: TileAnimator,
}

impl Cell {
    fn new(config: AnimationConfig) -> Self {
        Self {
            letter: None,
            classification: None,
            animator: TileAnimator::new(config),
        }
    }

    /// Typed letter, lowercase
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter.map(char::from)
    }

    /// Classification assigned when the row was evaluated
    ///
    /// This is set at submission; the visible background follows later, at
    /// the midpoint of the cell's flip.
    #[must_use]
    pub const fn classification(&self) -> Option<Classification> {
        self.classification
    }

    #[must_use]
    pub const fn animator(&self) -> &TileAnimator {
        &self.animator
    }
}

/// One attempt: cells plus phase
#[derive(Debug, Clone, PartialEq)]
pub struct RowState {
    cells: [Cell; WORD_LENGTH],
    phase: RowPhase,
    feedback: Option<Feedback>,
}

impl RowState {
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            cells: std::array::from_fn(|_| Cell::new(config)),
            phase: RowPhase::Entering,
            feedback: None,
        }
    }

    /// Recycle the row for a new session
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.letter = None;
            cell.classification = None;
            cell.animator.reset();
        }
        self.phase = RowPhase::Entering;
        self.feedback = None;
    }

    #[must_use]
    pub const fn phase(&self) -> RowPhase {
        self.phase
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// Feedback of the evaluated guess
    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    #[must_use]
    pub fn is_evaluating(&self) -> bool {
        self.phase == RowPhase::Evaluating
    }

    /// Whether any cell still has its flip in flight
    #[must_use]
    pub fn is_flipping(&self) -> bool {
        self.cells.iter().any(|cell| cell.animator.is_flipping())
    }

    /// Write `letter` into `column` and pop the cell
    pub(crate) fn put_letter(&mut self, column: usize, letter: u8) {
        debug_assert_eq!(self.phase, RowPhase::Entering);
        let cell = &mut self.cells[column];
        cell.letter = Some(letter);
        cell.animator.start_pop();
    }

    /// Clear the letter in `column` without animating
    pub(crate) fn clear_letter(&mut self, column: usize) {
        debug_assert_eq!(self.phase, RowPhase::Entering);
        self.cells[column].letter = None;
    }

    /// The complete word, if every cell holds a letter
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(&self.cells) {
            *slot = cell.letter?;
        }
        Word::from_letters(letters).ok()
    }

    /// Shake every cell after a rejected submission
    pub(crate) fn shake(&mut self) {
        for cell in &mut self.cells {
            cell.animator.start_shake();
        }
    }

    /// Record `feedback` and start the cascading reveal, left to right
    pub(crate) fn reveal(&mut self, feedback: Feedback, stagger: f32) {
        debug_assert_eq!(self.phase, RowPhase::Entering);
        for (i, (cell, &class)) in self.cells.iter_mut().zip(feedback.classes()).enumerate() {
            cell.classification = Some(class);
            cell.animator.start_flip(class, i as f32 * stagger);
        }
        self.feedback = Some(feedback);
        self.phase = RowPhase::Evaluating;
    }

    /// Close the row once its reveal has finished
    pub(crate) fn accept(&mut self) {
        debug_assert!(!self.is_flipping());
        self.phase = RowPhase::Accepted;
    }

    pub(crate) fn advance(&mut self, dt: f32) {
        for cell in &mut self.cells {
            cell.animator.advance(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn filled(word: &str) -> RowState {
        let mut row = RowState::new(AnimationConfig::default());
        for (i, b) in word.bytes().enumerate() {
            row.put_letter(i, b);
        }
        row
    }

    #[test]
    fn word_requires_every_cell() {
        let mut row = filled("crane");
        assert_eq!(row.word(), Word::new("crane").ok());

        row.clear_letter(4);
        assert_eq!(row.word(), None);
    }

    #[test]
    fn typing_pops_and_erasing_does_not() {
        let mut row = filled("cr");
        assert!(row.cells()[1].animator().is_popping());

        for _ in 0..30 {
            row.advance(1.0 / 60.0);
        }
        row.clear_letter(1);
        assert!(!row.cells()[1].animator().is_animating());
        assert_eq!(row.cells()[1].letter(), None);
    }

    #[test]
    fn reveal_staggers_flips() {
        let mut row = filled("trace");
        let feedback = evaluate("trace", "crane").unwrap();
        row.reveal(feedback, 0.2);

        assert_eq!(row.phase(), RowPhase::Evaluating);
        assert_eq!(row.feedback(), Some(feedback));
        for (i, cell) in row.cells().iter().enumerate() {
            assert!(cell.animator().is_flipping());
            assert!((cell.animator().flip().delay() - i as f32 * 0.2).abs() < 1e-6);
            assert_eq!(cell.classification(), Some(feedback.get(i)));
        }
    }

    #[test]
    fn reset_recycles_row() {
        let mut row = filled("trace");
        row.reveal(evaluate("trace", "crane").unwrap(), 0.2);
        row.advance(0.05);
        row.reset();

        assert_eq!(row, RowState::new(AnimationConfig::default()));
    }
}

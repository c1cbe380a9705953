//! Best-known state of every letter, for the on-screen keyboard

use crate::core::{Classification, Feedback, Word};
use rustc_hash::FxHashMap;

/// Letter rows of a QWERTY keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Per-letter classification, only ever upgraded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, Classification>,
}

impl KeyboardState {
    /// Record `class` for `letter` unless a better state is already known
    pub fn record(&mut self, letter: u8, class: Classification) {
        let letter = letter.to_ascii_lowercase();
        self.letters
            .entry(letter)
            .and_modify(|known| *known = (*known).max(class))
            .or_insert(class);
    }

    /// Record every letter of an evaluated guess
    pub fn record_guess(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &class) in guess.chars().iter().zip(feedback.classes()) {
            self.record(letter, class);
        }
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<Classification> {
        u8::try_from(letter.to_ascii_lowercase())
            .ok()
            .and_then(|b| self.letters.get(&b).copied())
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{Absent, Correct, Present};

    #[test]
    fn states_only_upgrade() {
        let mut keys = KeyboardState::default();
        keys.record(b'a', Present);
        keys.record(b'a', Absent);
        assert_eq!(keys.get('a'), Some(Present));

        keys.record(b'a', Correct);
        keys.record(b'a', Present);
        assert_eq!(keys.get('A'), Some(Correct));
    }

    #[test]
    fn record_guess_keeps_best_of_duplicates() {
        let mut keys = KeyboardState::default();
        let guess = Word::new("llama").unwrap();
        let secret = Word::new("allow").unwrap();
        keys.record_guess(&guess, &Feedback::calculate(&guess, &secret));

        assert_eq!(keys.get('l'), Some(Correct));
        assert_eq!(keys.get('a'), Some(Present));
        assert_eq!(keys.get('m'), Some(Absent));
        assert_eq!(keys.get('z'), None);
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.concat().chars().collect();
        letters.sort_unstable();
        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }
}

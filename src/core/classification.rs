//! Per-letter verdict of a guess

use std::fmt;

/// Classification of one guessed letter against the secret word
///
/// The ordering `Absent < Present < Correct` is meaningful: a letter's
/// best-known state only ever moves up this ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// Letter does not occur, or every occurrence is already claimed
    Absent,
    /// Letter occurs at a different position
    Present,
    /// Letter matches the secret at this position
    Correct,
}

impl Classification {
    /// Single-character code used by the `G/Y/-` notation
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Square emoji for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a `G/Y/-` code or emoji
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_upgrade_rank() {
        assert!(Classification::Absent < Classification::Present);
        assert!(Classification::Present < Classification::Correct);
        assert_eq!(
            Classification::Present.max(Classification::Absent),
            Classification::Present
        );
    }

    #[test]
    fn symbols_round_trip() {
        for class in [
            Classification::Absent,
            Classification::Present,
            Classification::Correct,
        ] {
            assert_eq!(Classification::from_symbol(class.symbol()), Some(class));
            assert_eq!(Classification::from_symbol(class.emoji()), Some(class));
        }
        assert_eq!(Classification::from_symbol('x'), None);
    }
}

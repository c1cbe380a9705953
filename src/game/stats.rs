//! Results across sessions

use super::engine::Outcome;

/// Win/loss record and guess distribution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n - 1]` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            guess_distribution: vec![0; max_guesses],
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        self.games_played += 1;
        match outcome {
            Outcome::Won { guesses } => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if guesses > self.guess_distribution.len() {
                    self.guess_distribution.resize(guesses, 0);
                }
                if let Some(slot) = guesses
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            Outcome::Lost => self.current_streak = 0,
        }
    }

    /// Share of games won, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }

    /// Mean guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tracks_streaks_and_distribution() {
        let mut stats = Statistics::new(6);
        stats.record(Outcome::Won { guesses: 3 });
        stats.record(Outcome::Won { guesses: 4 });
        stats.record(Outcome::Lost);
        stats.record(Outcome::Won { guesses: 3 });

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, vec![0, 0, 2, 1, 0, 0]);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
        assert!((stats.average_guesses().unwrap() - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_statistics() {
        let stats = Statistics::new(6);
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert_eq!(stats.average_guesses(), None);
    }
}

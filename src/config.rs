//! Tunable game and animation parameters

/// Default number of attempts per session
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Most attempts a session may be configured with
pub const MAX_GUESSES_LIMIT: usize = 20;

/// Timing and shape of the per-tile animations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Peak scale reached by a pop before it shrinks back to 1.0
    pub pop_max_scale: f32,
    /// Scale change per 60 Hz frame
    pub pop_speed: f32,
    /// Seconds a shake lasts
    pub shake_duration: f32,
    /// Peak horizontal offset of a shake, in pixels
    pub shake_magnitude: f32,
    /// Angular frequency of the shake oscillation
    pub shake_frequency: f32,
    /// Flip rotation speed, in degrees per second
    pub flip_speed: f32,
    /// Extra pre-delay per column of a cascading reveal, in seconds
    pub flip_stagger: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            pop_max_scale: 1.15,
            pop_speed: 0.1,
            shake_duration: 0.4,
            shake_magnitude: 5.0,
            shake_frequency: 50.0,
            flip_speed: 700.0,
            flip_stagger: 0.2,
        }
    }
}

impl AnimationConfig {
    /// Seconds one flip takes once its pre-delay has elapsed
    #[must_use]
    pub fn flip_duration(&self) -> f32 {
        180.0 / self.flip_speed
    }
}

/// Session-level configuration of a game engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub max_guesses: usize,
    pub animation: AnimationConfig,
    /// Upper bound on a single tick, so a stalled frame cannot skip an animation
    pub max_frame_step: f32,
    /// Seconds a transient notification stays visible
    pub notification_duration: f32,
    /// Seed for secret word selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            animation: AnimationConfig::default(),
            max_frame_step: 0.1,
            notification_duration: 1.0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the number of attempts, clamped to `1..=MAX_GUESSES_LIMIT`
    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses.clamp(1, MAX_GUESSES_LIMIT);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert!((config.max_frame_step - 0.1).abs() < f32::EPSILON);
        assert!((config.animation.flip_duration() - 180.0 / 700.0).abs() < f32::EPSILON);
    }

    #[test]
    fn max_guesses_never_zero() {
        assert_eq!(GameConfig::default().with_max_guesses(0).max_guesses, 1);
        assert_eq!(GameConfig::default().with_max_guesses(8).max_guesses, 8);
    }

    #[test]
    fn max_guesses_capped() {
        let config = GameConfig::default().with_max_guesses(30_000);
        assert_eq!(config.max_guesses, MAX_GUESSES_LIMIT);
    }
}

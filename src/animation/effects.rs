//! The three tile effects
//!
//! Each effect is a small state struct with an `active` flag and its own
//! progress. They are composed by [`super::TileAnimator`] and advanced
//! independently of each other.

use super::REFERENCE_FPS;
use crate::config::AnimationConfig;
use crate::core::Classification;

/// Scale at rest
const REST_SCALE: f32 = 1.0;
/// Angle at which the revealed face becomes visible
const HALF_TURN: f32 = 90.0;
/// Angle at which a flip is complete
const FULL_TURN: f32 = 180.0;
/// Pre-delay residue treated as elapsed, absorbing f32 rounding of summed steps
const DELAY_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopDirection {
    #[default]
    Growing,
    Shrinking,
}

impl PopDirection {
    const fn sign(self) -> f32 {
        match self {
            Self::Growing => 1.0,
            Self::Shrinking => -1.0,
        }
    }
}

/// Brief scale-up/scale-down when a letter is typed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pop {
    active: bool,
    scale: f32,
    direction: PopDirection,
}

impl Default for Pop {
    fn default() -> Self {
        Self {
            active: false,
            scale: REST_SCALE,
            direction: PopDirection::Growing,
        }
    }
}

impl Pop {
    /// Start popping unless a pop is already running
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.scale = REST_SCALE;
        self.direction = PopDirection::Growing;
    }

    pub fn advance(&mut self, dt: f32, config: &AnimationConfig) {
        if !self.active {
            return;
        }

        self.scale += config.pop_speed * self.direction.sign() * dt * REFERENCE_FPS;

        if self.scale >= config.pop_max_scale {
            self.scale = config.pop_max_scale;
            self.direction = PopDirection::Shrinking;
        }
        if self.scale <= REST_SCALE && self.direction == PopDirection::Shrinking {
            self.scale = REST_SCALE;
            self.active = false;
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub const fn direction(&self) -> PopDirection {
        self.direction
    }
}

/// Damped lateral oscillation when a guess is rejected
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shake {
    active: bool,
    remaining: f32,
    offset: f32,
}

impl Shake {
    pub fn start(&mut self, config: &AnimationConfig) {
        self.active = true;
        self.remaining = config.shake_duration;
        self.offset = 0.0;
    }

    pub fn advance(&mut self, dt: f32, config: &AnimationConfig) {
        if !self.active {
            return;
        }

        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.active = false;
            self.remaining = 0.0;
            self.offset = 0.0;
        } else {
            self.offset =
                config.shake_magnitude * (self.remaining * config.shake_frequency).sin();
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn remaining(&self) -> f32 {
        self.remaining
    }

    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }
}

/// Half-turn rotation that reveals a tile's classification
///
/// The classification is committed once, on the tick the angle first
/// reaches 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Flip {
    active: bool,
    angle: f32,
    delay: f32,
    target: Option<Classification>,
    revealed: bool,
}

impl Flip {
    pub fn start(&mut self, target: Classification, delay: f32) {
        self.active = true;
        self.angle = 0.0;
        self.delay = delay.max(0.0);
        self.target = Some(target);
        self.revealed = false;
    }

    /// Advance the rotation
    ///
    /// Returns the target classification on the single tick where the flip
    /// crosses its midpoint.
    pub fn advance(&mut self, dt: f32, config: &AnimationConfig) -> Option<Classification> {
        if !self.active {
            return None;
        }

        // A tick spent on the pre-delay never rotates
        if self.delay > 0.0 {
            self.delay -= dt;
            if self.delay < DELAY_TOLERANCE {
                self.delay = 0.0;
            }
            return None;
        }

        self.angle += config.flip_speed * dt;

        let mut committed = None;
        if self.angle >= HALF_TURN && !self.revealed {
            self.revealed = true;
            committed = self.target;
        }

        if self.angle >= FULL_TURN {
            self.angle = FULL_TURN;
            self.active = false;
        }

        committed
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    #[must_use]
    pub const fn delay(&self) -> f32 {
        self.delay
    }

    /// Whether the midpoint has been crossed
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }
}

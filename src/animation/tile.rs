//! Per-cell animation record
//!
//! `TileAnimator` composes the pop, shake and flip effects of one grid cell
//! and exposes the values a renderer draws from.

use super::effects::{Flip, Pop, Shake};
use crate::config::AnimationConfig;
use crate::core::Classification;

/// Foreground tone of a tile's letter
///
/// Revealed tiles carry a saturated background, so their letter switches to
/// a light foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTone {
    #[default]
    Dark,
    Light,
}

/// Animation state of one grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct TileAnimator {
    config: AnimationConfig,
    pop: Pop,
    shake: Shake,
    flip: Flip,
    background: Option<Classification>,
    text: TextTone,
}

impl TileAnimator {
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            pop: Pop::default(),
            shake: Shake::default(),
            flip: Flip::default(),
            background: None,
            text: TextTone::Dark,
        }
    }

    /// Return to the blank, idle state
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Feedback for a typed letter; no-op while a pop is running
    pub fn start_pop(&mut self) {
        self.pop.start();
    }

    /// Feedback for a rejected guess
    ///
    /// Ignored while a flip is running.
    pub fn start_shake(&mut self) {
        if self.flip.is_active() {
            return;
        }
        self.shake.start(&self.config);
    }

    /// Begin revealing `target` after `delay` seconds
    pub fn start_flip(&mut self, target: Classification, delay: f32) {
        self.flip.start(target, delay);
    }

    /// Advance every effect by `dt` seconds
    ///
    /// `dt` must be non-negative.
    pub fn advance(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "animation step must be non-negative, got {dt}");
        let dt = dt.max(0.0);

        self.shake.advance(dt, &self.config);
        self.pop.advance(dt, &self.config);
        if let Some(class) = self.flip.advance(dt, &self.config) {
            self.background = Some(class);
            self.text = TextTone::Light;
        }
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.pop.is_active() || self.shake.is_active() || self.flip.is_active()
    }

    #[must_use]
    pub const fn is_flipping(&self) -> bool {
        self.flip.is_active()
    }

    #[must_use]
    pub const fn is_shaking(&self) -> bool {
        self.shake.is_active()
    }

    #[must_use]
    pub const fn is_popping(&self) -> bool {
        self.pop.is_active()
    }

    /// Uniform scale to draw with; a flip suppresses the pop
    #[must_use]
    pub fn scale(&self) -> f32 {
        if self.pop.is_active() && !self.flip.is_active() {
            self.pop.scale()
        } else {
            1.0
        }
    }

    /// Horizontal displacement to draw with; a flip suppresses the shake
    #[must_use]
    pub fn offset_x(&self) -> f32 {
        if self.shake.is_active() && !self.flip.is_active() {
            self.shake.offset()
        } else {
            0.0
        }
    }

    /// Vertical squash of a flipping tile, 1.0 when flat
    #[must_use]
    pub fn height_factor(&self) -> f32 {
        if self.flip.is_active() {
            self.flip.angle().to_radians().cos().abs()
        } else {
            1.0
        }
    }

    /// Classification currently shown as background, once revealed
    #[must_use]
    pub const fn background(&self) -> Option<Classification> {
        self.background
    }

    #[must_use]
    pub const fn text_tone(&self) -> TextTone {
        self.text
    }

    #[must_use]
    pub const fn pop(&self) -> &Pop {
        &self.pop
    }

    #[must_use]
    pub const fn shake(&self) -> &Shake {
        &self.shake
    }

    #[must_use]
    pub const fn flip(&self) -> &Flip {
        &self.flip
    }
}

impl Default for TileAnimator {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

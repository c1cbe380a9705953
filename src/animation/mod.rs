//! Per-tile animations
//!
//! Every grid cell owns a [`TileAnimator`] composed of three independent
//! effects: a pop when a letter is typed, a shake when a guess is rejected and
//! a flip that reveals the classification. Effects advance on elapsed time
//! only; they never look at game state.

mod effects;
mod tile;

pub use effects::{Flip, Pop, PopDirection, Shake};
pub use tile::{TextTone, TileAnimator};

/// Rate the pop speed is expressed against
pub const REFERENCE_FPS: f32 = 60.0;

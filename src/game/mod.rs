//! Turn state machine and session state
//!
//! [`GameEngine`] owns a grid of [`RowState`]s, accepts [`InputEvent`]s and
//! exposes read-only snapshots for renderers.

mod engine;
mod event;
mod keyboard;
mod row;
mod snapshot;
mod stats;

pub use engine::{GameEngine, GameStatus, NOT_IN_WORD_LIST, Outcome};
pub use event::{InputEvent, Transition};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use row::{Cell, RowPhase, RowState};
pub use snapshot::{BorderTone, CellSnapshot, EngineSnapshot};
pub use stats::Statistics;

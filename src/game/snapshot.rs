//! Read-only views handed to renderers each frame

use super::engine::{GameStatus, Outcome};
use super::row::Cell;
use crate::animation::TextTone;
use crate::core::Classification;

/// Border of a tile: light when empty, darker once it holds a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderTone {
    Empty,
    Filled,
}

/// Everything needed to draw one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSnapshot {
    pub letter: Option<char>,
    pub background: Option<Classification>,
    pub text: TextTone,
    pub border: BorderTone,
    pub scale: f32,
    pub height_factor: f32,
    pub offset_x: f32,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        let animator = cell.animator();
        Self {
            letter: cell.letter(),
            background: animator.background(),
            text: animator.text_tone(),
            border: if cell.letter().is_some() {
                BorderTone::Filled
            } else {
                BorderTone::Empty
            },
            scale: animator.scale(),
            height_factor: animator.height_factor(),
            offset_x: animator.offset_x(),
        }
    }
}

/// Engine-level state for a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub cursor_row: usize,
    pub cursor_column: usize,
    pub status: GameStatus,
    pub notification: Option<String>,
    /// A reveal is in flight and input is being dropped
    pub revealing: bool,
}

impl EngineSnapshot {
    #[must_use]
    pub const fn game_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Over(outcome) => Some(outcome),
        }
    }
}

//! Interactive terminal front end

mod app;
mod input;
mod palette;
mod rendering;

pub use app::{App, FRAME_BUDGET, run_tui};
pub use input::{KeyAction, map_key};
pub use rendering::{TILE_HEIGHT, TILE_WIDTH, tile_rect, ui};

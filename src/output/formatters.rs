//! Formatting utilities for terminal output

use crate::core::Classification;
use colored::{ColoredString, Colorize};

/// RGB fill of a revealed tile
#[must_use]
pub const fn tile_rgb(class: Classification) -> (u8, u8, u8) {
    match class {
        Classification::Correct => (106, 170, 100),
        Classification::Present => (201, 180, 88),
        Classification::Absent => (120, 124, 126),
    }
}

/// A letter drawn as a colored tile
#[must_use]
pub fn colored_tile(letter: char, class: Classification) -> ColoredString {
    let (r, g, b) = tile_rgb(class);
    format!(" {} ", letter.to_ascii_uppercase())
        .bold()
        .white()
        .on_truecolor(r, g, b)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░".repeat(10));
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "█".repeat(10));
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, format!("{}{}", "█".repeat(5), "░".repeat(5)));
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░".repeat(4));
    }

    #[test]
    fn tile_colors_distinct() {
        let colors = [
            tile_rgb(Classification::Correct),
            tile_rgb(Classification::Present),
            tile_rgb(Classification::Absent),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }

    #[test]
    fn colored_tile_uppercases_on_class_color() {
        let tile = colored_tile('a', Classification::Present);
        assert_eq!(tile.input, " A ");
        assert_eq!(
            tile.bgcolor,
            Some(colored::Color::TrueColor {
                r: 201,
                g: 180,
                b: 88
            })
        );
    }
}

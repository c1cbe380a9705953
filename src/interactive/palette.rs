//! Colors of the terminal front end

use crate::animation::TextTone;
use crate::core::Classification;
use crate::game::BorderTone;
use crate::output::formatters::tile_rgb;
use ratatui::style::Color;

pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);
pub const MID_GRAY: Color = Color::Rgb(119, 119, 119);
pub const WHITE: Color = Color::Rgb(255, 255, 255);
pub const BLACK: Color = Color::Rgb(0, 0, 0);

#[must_use]
pub const fn classification(class: Classification) -> Color {
    let (r, g, b) = tile_rgb(class);
    Color::Rgb(r, g, b)
}

#[must_use]
pub const fn border(tone: BorderTone) -> Color {
    match tone {
        BorderTone::Empty => LIGHT_GRAY,
        BorderTone::Filled => MID_GRAY,
    }
}

#[must_use]
pub const fn text(tone: TextTone) -> Color {
    match tone {
        TextTone::Dark => BLACK,
        TextTone::Light => WHITE,
    }
}

/// Key fill for the on-screen keyboard
#[must_use]
pub const fn key(state: Option<Classification>) -> (Color, Color) {
    match state {
        Some(class) => (classification(class), WHITE),
        None => (LIGHT_GRAY, BLACK),
    }
}

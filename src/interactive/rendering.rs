//! TUI rendering with ratatui
//!
//! Draws engine snapshots: the tile grid with its animations, the transient
//! notification, the end-of-game banner and the on-screen keyboard.

use super::app::App;
use super::palette;
use crate::core::WORD_LENGTH;
use crate::game::{CellSnapshot, KEYBOARD_ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Tile size at rest, in terminal cells
pub const TILE_WIDTH: u16 = 7;
pub const TILE_HEIGHT: u16 = 3;

/// Room reserved per tile, so a popped tile never overlaps its neighbour
const SLOT_WIDTH: u16 = TILE_WIDTH + 2;

/// Columns per pixel of shake offset
const SHAKE_COLUMNS_PER_PIXEL: f32 = 0.4;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let rows = u16::try_from(app.engine.rows().len()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(2),               // Notification / outcome
            Constraint::Min(rows.saturating_mul(TILE_HEIGHT)), // Grid
            Constraint::Length(5),               // Keyboard
            Constraint::Length(3),               // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_banner(f, app, chunks[1]);
    render_grid(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Plain)
                .style(Style::default().fg(palette::LIGHT_GRAY)),
        );
    f.render_widget(header, area);
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let lines = if let Some(message) = app.engine.outcome_message() {
        vec![
            Line::from(Span::styled(
                message,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press any key to play again",
                Style::default().fg(palette::LIGHT_GRAY),
            )),
        ]
    } else if let Some(text) = app.engine.notification() {
        vec![Line::from(Span::styled(
            format!(" {text} "),
            Style::default()
                .fg(palette::WHITE)
                .bg(palette::BLACK)
                .add_modifier(Modifier::BOLD),
        ))]
    } else {
        Vec::new()
    };

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.engine.rows().len();
    let width = SLOT_WIDTH * WORD_LENGTH as u16;
    let height = u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_mul(TILE_HEIGHT);
    let grid = centered(area, width, height);

    // Scroll so the cursor row stays on screen when the grid does not fit
    let visible = usize::from(grid.height / TILE_HEIGHT).min(rows);
    let first = app
        .engine
        .cursor_row()
        .saturating_sub(visible.saturating_sub(1))
        .min(rows - visible);

    for (line, row) in (first..first + visible).enumerate() {
        for column in 0..WORD_LENGTH {
            let slot = Rect {
                x: grid.x + column as u16 * SLOT_WIDTH,
                y: grid.y + line as u16 * TILE_HEIGHT,
                width: SLOT_WIDTH,
                height: TILE_HEIGHT,
            };
            let cell = app.engine.cell(row, column);
            if let Some(rect) = tile_rect(slot, &cell, grid) {
                render_tile(f, &cell, rect);
            }
        }
    }
}

/// Where a tile lands inside its slot once animations are applied
///
/// Pop widens the tile, flip squashes its height around the centre line and
/// shake shifts it sideways. The result is clipped to `bounds`; `None` means
/// the tile is edge-on and invisible this frame.
#[must_use]
pub fn tile_rect(slot: Rect, cell: &CellSnapshot, bounds: Rect) -> Option<Rect> {
    let width = (f32::from(TILE_WIDTH) * cell.scale)
        .round()
        .clamp(1.0, f32::from(SLOT_WIDTH)) as u16;
    let height = (f32::from(TILE_HEIGHT) * cell.height_factor)
        .round()
        .clamp(0.0, f32::from(TILE_HEIGHT)) as u16;
    if height == 0 {
        return None;
    }

    let shift = (cell.offset_x * SHAKE_COLUMNS_PER_PIXEL).round() as i32;
    let x = i32::from(slot.x) + i32::from(slot.width.saturating_sub(width) / 2) + shift;
    let y = slot.y + slot.height.saturating_sub(height) / 2;

    let rect = Rect {
        x: x.max(0) as u16,
        y,
        width,
        height,
    };
    let clipped = rect.intersection(bounds);
    (!clipped.is_empty()).then_some(clipped)
}

fn render_tile(f: &mut Frame, cell: &CellSnapshot, rect: Rect) {
    let letter = cell
        .letter
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default();
    let text_style = Style::default()
        .fg(palette::text(cell.text))
        .add_modifier(Modifier::BOLD);

    let (fill, edge) = match cell.background {
        Some(class) => {
            let color = palette::classification(class);
            (Style::default().bg(color), color)
        }
        None => (Style::default(), palette::border(cell.border)),
    };

    f.render_widget(Clear, rect);
    if rect.height >= TILE_HEIGHT {
        let tile = Paragraph::new(letter)
            .style(fill.patch(text_style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Plain)
                    .border_style(Style::default().fg(edge))
                    .style(fill),
            );
        f.render_widget(tile, rect);
    } else {
        // Mid-flip: a squashed band of the tile's current face
        let band = Paragraph::new(letter)
            .style(fill.bg(fill.bg.unwrap_or(edge)).patch(text_style))
            .alignment(Alignment::Center);
        f.render_widget(band, rect);
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.engine.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let (bg, fg) = palette::key(keyboard.get(c));
                    [
                        Span::styled(
                            format!(" {} ", c.to_ascii_uppercase()),
                            Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keys = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(keys, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let snapshot = app.engine.snapshot();
    let attempt = (snapshot.cursor_row + 1).min(app.engine.rows().len());
    let mode_text = if snapshot.game_over() {
        "Game over".to_string()
    } else {
        format!("Guess {attempt}/{}", app.engine.rows().len())
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} | Best: {}",
        app.stats.current_streak, app.stats.max_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = if snapshot.game_over() {
        "Any key: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Erase | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

/// A `width` x `height` rectangle centred in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TextTone;
    use crate::config::GameConfig;
    use crate::core::Word;
    use crate::game::{BorderTone, GameEngine, InputEvent};
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn rest() -> CellSnapshot {
        CellSnapshot {
            letter: Some('a'),
            background: None,
            text: TextTone::Dark,
            border: BorderTone::Filled,
            scale: 1.0,
            height_factor: 1.0,
            offset_x: 0.0,
        }
    }

    const SLOT: Rect = Rect {
        x: 10,
        y: 5,
        width: SLOT_WIDTH,
        height: TILE_HEIGHT,
    };
    const BOUNDS: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    };

    #[test]
    fn resting_tile_is_centred_in_slot() {
        let rect = tile_rect(SLOT, &rest(), BOUNDS).unwrap();
        assert_eq!(rect, Rect::new(11, 5, TILE_WIDTH, TILE_HEIGHT));
    }

    #[test]
    fn popped_tile_is_wider() {
        let cell = CellSnapshot {
            scale: 1.15,
            ..rest()
        };
        let rect = tile_rect(SLOT, &cell, BOUNDS).unwrap();
        assert_eq!(rect.width, 8);
        assert!(rect.width <= SLOT_WIDTH);
    }

    #[test]
    fn edge_on_flip_is_hidden() {
        let cell = CellSnapshot {
            height_factor: 0.0,
            ..rest()
        };
        assert_eq!(tile_rect(SLOT, &cell, BOUNDS), None);

        let cell = CellSnapshot {
            height_factor: 0.4,
            ..rest()
        };
        let rect = tile_rect(SLOT, &cell, BOUNDS).unwrap();
        assert_eq!((rect.y, rect.height), (6, 1));
    }

    #[test]
    fn shake_shifts_sideways() {
        let cell = CellSnapshot {
            offset_x: -5.0,
            ..rest()
        };
        let rect = tile_rect(SLOT, &cell, BOUNDS).unwrap();
        assert_eq!(rect.x, 9);
    }

    #[test]
    fn tiles_are_clipped_to_bounds() {
        let cell = CellSnapshot {
            offset_x: -5.0,
            ..rest()
        };
        let slot = Rect { x: 0, ..SLOT };
        let rect = tile_rect(slot, &cell, BOUNDS).unwrap();
        assert_eq!(rect.x, 0);
    }

    fn draw(app: &App<'_>, width: u16, height: u16) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
    }

    #[test]
    fn oversized_guess_limit_draws_without_overflow() {
        let dictionary = Dictionary::new(
            words_from_slice(&["crane"]),
            words_from_slice(&["slate"]),
        )
        .unwrap();
        let config = GameConfig::default().with_max_guesses(30_000);
        let engine = GameEngine::with_secret(&dictionary, config, Word::new("crane").unwrap());
        let mut app = App::new(engine);

        draw(&app, 80, 40);
        draw(&app, 80, 12);

        // Later rows scroll into view on a short terminal
        for _ in 0..15 {
            let events = "slate"
                .chars()
                .map(InputEvent::Letter)
                .chain([InputEvent::Submit]);
            app.engine.tick(events, 1.0 / 60.0);
            for _ in 0..70 {
                app.update(1.0 / 60.0);
            }
        }
        assert_eq!(app.engine.cursor_row(), 15);
        draw(&app, 80, 12);
    }
}

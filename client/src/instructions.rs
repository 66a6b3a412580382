use glam::{Vec2, vec2};
use macroquad::prelude::*;

use crate::draw::{TextStyle, draw_centered_text};
use common::{GameConfig, rect::Rect};

const LINE_SPACING: f32 = 40.0;
const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_OFFSET: f32 = 120.0; // Below the screen centre.
const BUTTON_OUTLINE: f32 = 3.0;
pub const BUTTON_LABEL: &str = "I understand";

/// Where the welcome screen puts its text and button for a given window.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionsLayout {
    pub lines: Vec<(String, Vec2)>, // Text and its centre.
    pub button: Rect,
}

impl InstructionsLayout {
    pub fn new(config: &GameConfig) -> Self {
        let centre = vec2(config.width() / 2.0, config.height() / 2.0);
        let text = [
            "Welcome to the Maze Game!".to_string(),
            format!("Navigate through the maze to collect {} coins.", config.coin_count),
            "The finish line will be enabled after collecting all coins.".to_string(),
            "Reach the finish line before time runs out!".to_string(),
            "Controls: Use W, A, S, D to move.".to_string(),
        ];

        let lines = text
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let offset = (i as f32 - 2.0) * LINE_SPACING;
                (line, centre + vec2(0.0, offset))
            })
            .collect();

        let button = Rect::new(
            centre.x - BUTTON_WIDTH / 2.0,
            centre.y + BUTTON_OFFSET,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        Self { lines, button }
    }

    pub fn draw(&self, width: f32) {
        clear_background(BLACK);

        for (line, centre) in &self.lines {
            draw_centered_text(line, *centre, TextStyle::instruction(width));
        }

        let b = &self.button;
        draw_rectangle(b.x, b.y, b.w, b.h, WHITE);
        draw_rectangle_lines(b.x, b.y, b.w, b.h, BUTTON_OUTLINE, BLACK);
        draw_centered_text(BUTTON_LABEL, b.center(), TextStyle::button());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_sits_below_the_centre_of_the_default_window() {
        let layout = InstructionsLayout::new(&GameConfig::default());
        assert_eq!(layout.button, Rect::new(200.0, 440.0, 200.0, 50.0));
    }

    #[test]
    fn lines_are_centred_and_evenly_spaced() {
        let layout = InstructionsLayout::new(&GameConfig::default());
        let centres: Vec<Vec2> = layout.lines.iter().map(|(_, c)| *c).collect();
        assert_eq!(
            centres,
            vec![
                vec2(300.0, 240.0),
                vec2(300.0, 280.0),
                vec2(300.0, 320.0),
                vec2(300.0, 360.0),
                vec2(300.0, 400.0),
            ]
        );
    }

    #[test]
    fn coin_count_appears_in_the_text() {
        let config = GameConfig {
            coin_count: 4,
            win_threshold: 4,
            ..GameConfig::default()
        };
        let layout = InstructionsLayout::new(&config);
        assert_eq!(
            layout.lines[1].0,
            "Navigate through the maze to collect 4 coins."
        );
    }
}

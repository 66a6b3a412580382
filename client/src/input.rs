use glam::Vec2;
use macroquad::prelude::*;

use common::{player::PlayerInput, rect::Rect};

/// What the game loop needs to know about the keyboard and mouse each frame.
pub trait InputSource {
    fn player_input(&self) -> PlayerInput;
    fn confirm_pressed(&self) -> bool;
    /// Position of a left click made this frame, if any.
    fn click(&self) -> Option<Vec2>;
    fn quit_requested(&self) -> bool;
}

pub struct MacroquadInput;

impl InputSource for MacroquadInput {
    fn player_input(&self) -> PlayerInput {
        PlayerInput {
            up: is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::S),
            left: is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::D),
        }
    }

    fn confirm_pressed(&self) -> bool {
        is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter)
    }

    fn click(&self) -> Option<Vec2> {
        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            Some(Vec2::new(x, y))
        } else {
            None
        }
    }

    fn quit_requested(&self) -> bool {
        is_quit_requested() || is_key_pressed(KeyCode::Escape)
    }
}

/// Whether this frame's input acknowledges the instructions: Enter, or a
/// click inside `button`.
pub fn acknowledged(input: &dyn InputSource, button: &Rect) -> bool {
    input.confirm_pressed() || input.click().is_some_and(|point| button.contains(point))
}

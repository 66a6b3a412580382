use glam::Vec2;

use crate::input::InputSource;
use common::player::PlayerInput;

#[derive(Default)]
pub struct MockInput {
    pub keys: PlayerInput,
    pub confirm: bool,
    pub click: Option<Vec2>,
    pub quit: bool,
}

impl InputSource for MockInput {
    fn player_input(&self) -> PlayerInput {
        self.keys
    }

    fn confirm_pressed(&self) -> bool {
        self.confirm
    }

    fn click(&self) -> Option<Vec2> {
        self.click
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

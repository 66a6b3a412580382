pub mod draw;
pub mod input;
pub mod instructions;
pub mod run;
pub mod time;

#[cfg(test)]
mod test_helpers;

use macroquad::window::Conf;

use common::GameConfig;

pub const WINDOW_TITLE: &str = "Maze Game";

/// Window sized to the play field of `config`.
pub fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: config.width() as i32,
        window_height: config.height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

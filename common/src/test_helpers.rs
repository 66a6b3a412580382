use glam::{Vec2, vec2};

use crate::{
    config::GameConfig,
    maze::{Maze, maker::{SPACE, WALL}},
};

/// Builds a maze from rows of `#` (wall) and `.` (space).
pub fn maze_from_ascii(rows: &[&str]) -> Maze {
    let grid = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| if c == '#' { WALL } else { SPACE })
                .collect()
        })
        .collect();
    Maze::from_grid(grid)
}

/// Config sized to `maze`, with the default tile size and header.
pub fn config_for(maze: &Maze) -> GameConfig {
    GameConfig {
        cols: maze.cols(),
        rows: maze.rows(),
        seed: Some(0),
        ..GameConfig::default()
    }
}

/// Pixel position of the tile at `(x, y)` under `config`.
pub fn tile(config: &GameConfig, x: usize, y: usize) -> Vec2 {
    vec2(
        x as f32 * config.tile_size,
        config.header_height + y as f32 * config.tile_size,
    )
}

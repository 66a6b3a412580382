pub mod maker;

use std::{collections::VecDeque, fmt};

use glam::{Vec2, vec2};
use log::debug;
use rand::Rng;

use crate::{error::ConfigurationError, rect::Rect};
use maker::{Cell, MazeMaker, SPACE};

pub const START_CELL: (usize, usize) = (1, 1);

/// Immutable list of wall rectangles in pixel space, one per wall cell, in
/// row-major order.
pub type WallSet = Vec<Rect>;

#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Vec<Vec<u8>>, // Indexed `grid[y][x]`.
    pub spaces: Vec<(usize, usize)>, // Open cells as `(x, y)`, row-major.
}

/// Generates a `cols` x `rows` maze. Deterministic when `seed` is given.
pub fn generate(cols: usize, rows: usize, seed: Option<u64>) -> Result<Maze, ConfigurationError> {
    let mut rng = crate::rng_from_seed(seed);
    Maze::generate(cols, rows, &mut rng)
}

/// Index of the last room on an axis of `n` cells: the largest odd number
/// below `n`. Requires `n >= 2`.
pub fn last_room(n: usize) -> usize {
    if n % 2 == 0 { n - 1 } else { n - 2 }
}

impl Maze {
    pub fn generate<R: Rng>(
        cols: usize,
        rows: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        let (start_x, start_y) = START_CELL;
        if cols <= start_x || rows <= start_y {
            return Err(ConfigurationError::InvalidGridSize { cols, rows });
        }

        let maker = MazeMaker::new(cols, rows, Cell { x: start_x, y: start_y }, rng);
        let maze = Self::from_grid(maker.grid);
        debug!(
            "generated {}x{} maze with {} open cells:\n{}",
            cols,
            rows,
            maze.spaces.len(),
            maze
        );

        Ok(maze)
    }

    pub fn from_grid(grid: Vec<Vec<u8>>) -> Self {
        let mut spaces = Vec::new();

        for (y, row) in grid.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == SPACE {
                    spaces.push((x, y));
                }
            }
        }

        Self { grid, spaces }
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Cells outside the grid count as walls.
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .is_none_or(|&cell| cell != SPACE)
    }

    /// Top-left pixel of a cell, with the maze drawn at `origin`.
    pub fn cell_position(x: usize, y: usize, tile: f32, origin: Vec2) -> Vec2 {
        origin + vec2(x as f32 * tile, y as f32 * tile)
    }

    pub fn cell_rect(x: usize, y: usize, tile: f32, origin: Vec2) -> Rect {
        Rect::square(Self::cell_position(x, y, tile, origin), tile)
    }

    pub fn walls(&self, tile: f32, origin: Vec2) -> WallSet {
        let mut walls = Vec::new();

        for (y, row) in self.grid.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell != SPACE {
                    walls.push(Self::cell_rect(x, y, tile, origin));
                }
            }
        }

        walls
    }

    /// Flood fill over open cells from `start`. The result is indexed
    /// `[y][x]`; a wall or out-of-bounds start reaches nothing.
    pub fn reachable_from(&self, start: (usize, usize)) -> Vec<Vec<bool>> {
        let height = self.rows();
        let width = self.cols();
        let mut visited = vec![vec![false; width]; height];

        let (start_x, start_y) = start;
        if self.is_wall(start_x, start_y) {
            return visited;
        }

        let mut queue = VecDeque::new();
        visited[start_y][start_x] = true;
        queue.push_back(start);

        while let Some((x, y)) = queue.pop_front() {
            let neighbors = [
                (x.wrapping_add(1), y),
                (x.wrapping_sub(1), y),
                (x, y.wrapping_add(1)),
                (x, y.wrapping_sub(1)),
            ];

            for (nx, ny) in neighbors {
                if nx >= width || ny >= height {
                    continue;
                }
                if visited[ny][nx] || self.grid[ny][nx] != SPACE {
                    continue;
                }
                visited[ny][nx] = true;
                queue.push_back((nx, ny));
            }
        }

        visited
    }

    pub fn is_reachable(&self, from: (usize, usize), to: (usize, usize)) -> bool {
        let (to_x, to_y) = to;
        if self.is_wall(to_x, to_y) {
            return false;
        }
        self.reachable_from(from)[to_y][to_x]
    }

    pub fn log(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell == SPACE { "  " } else { "██" })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::maze_from_ascii;

    #[test]
    fn test_backtrack_all_spaces_are_connected() {
        for seed in 0..64 {
            let maze = generate(30, 30, Some(seed)).expect("30x30 should be a valid grid");
            assert_all_spaces_are_connected(&maze);
        }
    }

    #[test]
    fn test_unseeded_mazes_are_connected() {
        for _ in 0..16 {
            let maze = generate(31, 17, None).expect("31x17 should be a valid grid");
            assert_all_spaces_are_connected(&maze);
        }
    }

    #[test]
    fn test_same_seed_gives_same_maze() {
        let a = generate(30, 30, Some(1234)).unwrap();
        let b = generate(30, 30, Some(1234)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_small_grid_keeps_start_open_and_connected() {
        let maze = generate(4, 4, Some(42)).unwrap();
        assert!(!maze.is_wall(1, 1));
        assert_all_spaces_are_connected(&maze);
        // Four rooms joined by three passages.
        assert_eq!(maze.spaces.len(), 7);
    }

    #[test]
    fn test_grid_too_small_for_start_is_rejected() {
        assert_eq!(
            generate(1, 5, Some(0)),
            Err(ConfigurationError::InvalidGridSize { cols: 1, rows: 5 })
        );
        assert_eq!(
            generate(5, 0, None),
            Err(ConfigurationError::InvalidGridSize { cols: 5, rows: 0 })
        );
    }

    #[test]
    fn test_walls_are_one_rect_per_wall_cell_offset_by_origin() {
        let maze = maze_from_ascii(&["###", "#.#", "###"]);
        let walls = maze.walls(20.0, vec2(0.0, 40.0));

        assert_eq!(walls.len(), 8);
        assert_eq!(walls[0], Rect::new(0.0, 40.0, 20.0, 20.0));
        assert_eq!(walls[3], Rect::new(0.0, 60.0, 20.0, 20.0));
        assert_eq!(walls[4], Rect::new(40.0, 60.0, 20.0, 20.0));
        assert!(!walls.contains(&Rect::new(20.0, 60.0, 20.0, 20.0)));
    }

    #[test]
    fn test_is_reachable_respects_walls() {
        let maze = maze_from_ascii(&[
            "#####", //
            "#..##", //
            "#####", //
            "##..#", //
            "#####",
        ]);
        assert!(maze.is_reachable((1, 1), (2, 1)));
        assert!(!maze.is_reachable((1, 1), (3, 3)));
        assert!(!maze.is_reachable((1, 1), (0, 0)));
        assert!(!maze.is_reachable((0, 0), (1, 1)));
    }

    #[test]
    fn test_last_room_is_largest_odd_index() {
        assert_eq!(last_room(30), 29);
        assert_eq!(last_room(31), 29);
        assert_eq!(last_room(4), 3);
        assert_eq!(last_room(2), 1);
    }

    #[test]
    fn test_out_of_bounds_counts_as_wall() {
        let maze = maze_from_ascii(&["#.", ".."]);
        assert!(maze.is_wall(0, 0));
        assert!(!maze.is_wall(1, 0));
        assert!(maze.is_wall(2, 0));
        assert!(maze.is_wall(0, 2));
    }

    fn assert_all_spaces_are_connected(maze: &Maze) {
        let grid = &maze.grid;

        let height = grid.len();
        assert!(height != 0, "maze should have some rows");
        let width = grid[0].len();
        assert!(width != 0, "maze should have some columns");

        let total_spaces = grid.iter().flatten().filter(|&&cell| cell == SPACE).count();
        assert!(total_spaces > 1, "there should be more than one space");
        assert_eq!(
            total_spaces,
            maze.spaces.len(),
            "total spaces should equal `maze.spaces.len()`"
        );

        let visited = maze.reachable_from(START_CELL);
        let visited_count = visited.iter().flatten().filter(|&&v| v).count();

        assert!(
            total_spaces == visited_count,
            "all spaces should be connected:\n{}",
            maze.log()
        );
    }
}

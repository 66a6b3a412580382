pub mod algorithms;

use rand::{Rng, seq::SliceRandom};

use algorithms::backtrack::Backtrack;

pub const WALL: u8 = 1;
pub const SPACE: u8 = 0;

// Lattice steps: right, left, down, up.
pub const DIRECTIONS: [(isize, isize); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(grid: &[Vec<u8>], x: usize, y: usize) -> Cell {
        debug_assert!(
            y < grid.len() && x < grid[0].len(),
            "cell coordinates are out of bounds"
        );

        Cell { x, y }
    }
}

pub struct MazeMaker<'a, R: Rng> {
    pub grid: Vec<Vec<u8>>,
    rng: &'a mut R,
    width: usize,
    height: usize,
}

impl<'a, R: Rng> MazeMaker<'a, R> {
    /// Carves a maze into a `width` x `height` grid of walls, starting from
    /// `start`. The caller is responsible for `start` being in bounds.
    pub fn new(width: usize, height: usize, start: Cell, rng: &'a mut R) -> Self {
        let grid = vec![vec![WALL; width]; height];
        let mut maze = MazeMaker {
            grid,
            rng,
            width,
            height,
        };
        maze.backtrack(start);
        maze
    }

    fn lattice_neighbor(&self, cell: Cell, dx: isize, dy: isize) -> Option<Cell> {
        let nx = cell.x as isize + dx;
        let ny = cell.y as isize + dy;

        let in_bounds =
            nx >= 0 && nx < self.width as isize && ny >= 0 && ny < self.height as isize;
        if !in_bounds {
            return None;
        }

        Some(Cell::new(&self.grid, nx as usize, ny as usize))
    }

    fn shuffled_directions(&mut self) -> [(isize, isize); 4] {
        let mut directions = DIRECTIONS;
        directions.shuffle(&mut *self.rng);
        directions
    }

    fn visit_cell(&mut self, cell: Cell) {
        let Cell { x, y } = cell;
        self.grid[y][x] = SPACE;
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.grid[cell.y][cell.x] == SPACE
    }

    fn remove_wall_between(&mut self, cell_1: Cell, cell_2: Cell) {
        let x = (cell_1.x + cell_2.x) / 2;
        let y = (cell_1.y + cell_2.y) / 2;
        self.grid[y][x] = SPACE;
    }
}

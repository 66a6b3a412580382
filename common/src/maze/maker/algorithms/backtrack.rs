use rand::Rng;

use super::super::{Cell, MazeMaker};

pub trait Backtrack {
    fn backtrack(&mut self, start: Cell);
}

// One pending visit: the cell, the order in which its neighbors will be
// tried, and how many of them have been tried so far.
struct Frame {
    cell: Cell,
    directions: [(isize, isize); 4],
    next: usize,
}

impl<R: Rng> Backtrack for MazeMaker<'_, R> {
    fn backtrack(&mut self, start: Cell) {
        self.visit_cell(start);

        let mut stack = vec![Frame {
            cell: start,
            directions: self.shuffled_directions(),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&(dx, dy)) = frame.directions.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            let curr = frame.cell;

            let Some(next) = self.lattice_neighbor(curr, dx, dy) else {
                continue;
            };

            if self.is_visited(next) {
                continue;
            }

            self.remove_wall_between(curr, next);
            self.visit_cell(next);
            stack.push(Frame {
                cell: next,
                directions: self.shuffled_directions(),
                next: 0,
            });
        }
    }
}

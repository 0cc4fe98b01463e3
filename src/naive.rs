//! Direct cell-by-cell transition over the whole torus.
//!
//! Neither splits nor caches anything, which makes it the reference the
//! memoized engines are checked against.

use crate::{Engine, Grid, Result};

/// B3/S23: birth on exactly 3 neighbors, survival on 2 or 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    neighbors == 3 || (alive && neighbors == 2)
}

/// Number of alive cells among the 8 neighbors of `(x, y)`, edges wrapping.
pub fn count_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (w, h) = grid.size();
    let x1 = if x == 0 { w - 1 } else { x - 1 };
    let x2 = if x == w - 1 { 0 } else { x + 1 };
    let y1 = if y == 0 { h - 1 } else { y - 1 };
    let y2 = if y == h - 1 { 0 } else { y + 1 };
    grid.get(x1, y1) as u8
        + grid.get(x, y1) as u8
        + grid.get(x2, y1) as u8
        + grid.get(x1, y) as u8
        + grid.get(x2, y) as u8
        + grid.get(x1, y2) as u8
        + grid.get(x, y2) as u8
        + grid.get(x2, y2) as u8
}

/// One generation of `grid`, computed directly for every cell.
pub fn naive_step(grid: &Grid) -> Grid {
    let (w, h) = grid.size();
    let mut next = grid.clone();
    for y in 0..h {
        for x in 0..w {
            next.set(x, y, next_state(grid.get(x, y), count_neighbors(grid, x, y)));
        }
    }
    next
}

/// Engine wrapper around [`naive_step`].
#[derive(Default)]
pub struct NaiveEngine {
    generations: u64,
}

impl NaiveEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for NaiveEngine {
    fn step(&mut self, grid: &Grid) -> Result<Grid> {
        self.generations += 1;
        Ok(naive_step(grid))
    }

    fn statistics(&self) -> String {
        format!("naive engine: {} generations\n", self.generations)
    }
}

use crate::{Grid, Result};

/// Engine advancing a toroidal Game of Life field.
pub trait Engine {
    /// Returns the next generation of `grid`; the size is preserved.
    ///
    /// Fails if the engine cannot handle the grid's dimensions.
    fn step(&mut self, grid: &Grid) -> Result<Grid>;

    /// Advances `grid` by `generations` steps.
    fn run(&mut self, grid: &Grid, generations: u64) -> Result<Grid> {
        let mut grid = grid.clone();
        for _ in 0..generations {
            grid = self.step(&grid)?;
        }
        Ok(grid)
    }

    /// Returns multiline string reporting engine stats.
    fn statistics(&self) -> String {
        String::new()
    }

    /// Some engines accumulate cache that can be freed.
    fn run_gc(&mut self) {}
}

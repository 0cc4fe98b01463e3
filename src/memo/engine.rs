use super::{check_dimensions, update, RegionCache};
use crate::region::RegionView;
use crate::utils::NiceInt;
use crate::{Config, Engine, Grid, Result};

/// Single-threaded memoized engine.
///
/// Every step pads the field with a wrapped one-cell frame and updates the
/// padded region through [`RegionCache`], which lives as long as the engine,
/// so regions met in earlier generations are not recomputed.
pub struct MemoEngine {
    cache: RegionCache,
    generations: u64,
}

impl MemoEngine {
    pub fn new(config: &Config) -> Self {
        Self::with_cache(RegionCache::new(config.cache))
    }

    pub fn with_cache(cache: RegionCache) -> Self {
        Self {
            cache,
            generations: 0,
        }
    }

    pub fn cache(&self) -> &RegionCache {
        &self.cache
    }

    /// Steps a raw row-major buffer of `width x height` cells.
    pub fn step_cells(&mut self, width: usize, height: usize, cells: &[u8]) -> Result<Vec<u8>> {
        let grid = Grid::from_cells(width, height, cells.to_vec())?;
        Ok(self.step(&grid)?.cells().to_vec())
    }
}

impl Default for MemoEngine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Engine for MemoEngine {
    fn step(&mut self, grid: &Grid) -> Result<Grid> {
        let (w, h) = grid.size();
        check_dimensions(w, h)?;
        let padded = grid.padded_with_wrap();
        let next = update(&mut self.cache, &RegionView::new(&padded, h + 2, w + 2));
        self.generations += 1;
        Grid::from_cells(w, h, next.cells().to_vec())
    }

    fn statistics(&self) -> String {
        let mut s = format!("generations: {}\n", NiceInt::from(self.generations));
        s += &self.cache.statistics();
        s
    }

    fn run_gc(&mut self) {
        self.cache.clear();
    }
}

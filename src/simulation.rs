use crate::{DefaultEngine, Engine, Grid, Result};

/// A live field together with the engine advancing it.
///
/// The field is replaced as a whole after every generation; a failed step
/// leaves it untouched.
pub struct Simulation<E: Engine = DefaultEngine> {
    grid: Grid,
    engine: E,
    generation: u64,
}

impl<E: Engine> Simulation<E> {
    pub fn new(grid: Grid, engine: E) -> Self {
        Self {
            grid,
            engine,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn advance(&mut self) -> Result<()> {
        self.grid = self.engine.step(&self.grid)?;
        self.generation += 1;
        Ok(())
    }

    pub fn advance_by(&mut self, generations: u64) -> Result<()> {
        for _ in 0..generations {
            self.advance()?;
        }
        Ok(())
    }
}

#![warn(clippy::all)]

mod config;
mod error;
mod grid;
mod memo;
mod naive;
mod region;
mod simulation;
mod utils;

pub use config::{CachePolicy, Config, LEAF_SIDE};
pub use error::{Error, Result};
pub use grid::Grid;
pub use memo::{
    at_floor, check_dimensions, evaluate_leaf, update, update_parallel, MemoEngine,
    ParallelMemoEngine, RegionCache, SharedRegionCache,
};
pub use naive::{count_neighbors, naive_step, next_state, NaiveEngine};
pub use region::{merge, split, Interior, RegionKey, RegionView};
pub use simulation::Simulation;
pub use utils::{Engine, NiceInt};

pub type DefaultEngine = MemoEngine;

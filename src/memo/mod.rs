mod cache;
mod engine;
mod leaf;
mod parallel;
mod updater;

pub use cache::RegionCache;
pub use engine::MemoEngine;
pub use leaf::evaluate as evaluate_leaf;
pub use parallel::{update_parallel, ParallelMemoEngine, SharedRegionCache};
pub use updater::{at_floor, check_dimensions, update};

use super::{at_floor, check_dimensions, leaf};
use crate::region::{merge, split, Interior, RegionKey, RegionView};
use crate::utils::{percent, NiceInt};
use crate::{Config, Engine, Grid, Result};
use ahash::{AHashMap, RandomState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

const SHARDS: usize = 64;

type Slot = Arc<OnceLock<Arc<Interior>>>;
type Shard = AHashMap<RegionKey, Slot>;

/// Region cache shared between threads.
///
/// A key maps to a slot created under the shard lock and filled through
/// [`OnceLock::get_or_init`] outside of it, so each region is computed by
/// exactly one thread while the others wait for its result.
pub struct SharedRegionCache {
    shards: Box<[Mutex<Shard>]>,
    hasher: RandomState,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SharedRegionCache {
    pub fn new() -> Self {
        Self {
            shards: (0..SHARDS).map(|_| Mutex::new(Shard::new())).collect(),
            hasher: RandomState::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn shard(&self, key: &RegionKey) -> MutexGuard<'_, Shard> {
        let i = self.hasher.hash_one(key) as usize % SHARDS;
        // slots are only ever added, a panicking holder leaves nothing half-written
        self.shards[i]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the interior cached for `key`, running `compute` first if
    /// no thread has done it yet.
    pub fn get_or_compute(
        &self,
        key: RegionKey,
        compute: impl FnOnce() -> Arc<Interior>,
    ) -> Arc<Interior> {
        let slot = self.shard(&key).entry(key).or_default().clone();
        let mut computed = false;
        let interior = slot
            .get_or_init(|| {
                computed = true;
                compute()
            })
            .clone();
        let counter = if computed { &self.misses } else { &self.hits };
        counter.fetch_add(1, Ordering::Relaxed);
        interior
    }

    pub fn peek(&self, region: &RegionView) -> Option<Arc<Interior>> {
        let key = region.key();
        self.shard(&key).get(&key).and_then(|slot| slot.get().cloned())
    }

    pub fn len(&self) -> usize {
        (0..SHARDS)
            .map(|i| self.shards[i].lock().unwrap_or_else(PoisonError::into_inner).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        for shard in self.shards.iter() {
            shard.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn bytes_total(&self) -> usize {
        let mut total = 0;
        for shard in self.shards.iter() {
            let shard = shard.lock().unwrap_or_else(PoisonError::into_inner);
            total += shard
                .iter()
                .map(|(k, v)| k.bytes_total() + v.get().map_or(0, |i| i.bytes_total()))
                .sum::<usize>();
        }
        total
    }

    pub fn statistics(&self) -> String {
        let (hits, misses) = (self.hits(), self.misses());
        let mut s = format!("region cache: shared, {} shards\n", SHARDS);
        s += &format!("entries: {}\n", NiceInt::from_usize(self.len()));
        s += &format!(
            "memory consumption: {} KB\n",
            NiceInt::from_usize(self.bytes_total() >> 10)
        );
        s += &format!(
            "misses / hits: {} / {} ({:.1}% hits)\n",
            NiceInt::from(misses),
            NiceInt::from(hits),
            percent(hits, hits + misses),
        );
        s
    }
}

impl Default for SharedRegionCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Parallel counterpart of [`update`](super::update): the top `fork_levels`
/// levels hand three quadrants to scoped threads and update the fourth on
/// the current one.
pub fn update_parallel(
    cache: &SharedRegionCache,
    region: &RegionView,
    fork_levels: u32,
) -> Arc<Interior> {
    cache.get_or_compute(region.key(), || {
        if at_floor(region) {
            return Arc::new(leaf::evaluate(region));
        }
        let [nw, ne, sw, se] = split(region);
        let [nw, ne, sw, se] = if fork_levels == 0 {
            [nw, ne, sw, se].map(|q| update_parallel(cache, &q, 0))
        } else {
            let levels = fork_levels - 1;
            std::thread::scope(|s| {
                let handles =
                    [ne, sw, se].map(|q| s.spawn(move || update_parallel(cache, &q, levels)));
                let nw = update_parallel(cache, &nw, levels);
                let [ne, sw, se] = handles.map(|h| {
                    h.join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                });
                [nw, ne, sw, se]
            })
        };
        Arc::new(merge([&nw, &ne, &sw, &se]))
    })
}

/// Memoized engine forking the upper levels of the recursion onto threads.
pub struct ParallelMemoEngine {
    cache: SharedRegionCache,
    fork_levels: u32,
    generations: u64,
}

impl ParallelMemoEngine {
    /// The cache policy of `config` is not used: the shared cache is always
    /// unbounded.
    pub fn new(config: &Config) -> Self {
        Self {
            cache: SharedRegionCache::new(),
            fork_levels: config.parallel_levels,
            generations: 0,
        }
    }

    pub fn cache(&self) -> &SharedRegionCache {
        &self.cache
    }
}

impl Default for ParallelMemoEngine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Engine for ParallelMemoEngine {
    fn step(&mut self, grid: &Grid) -> Result<Grid> {
        let (w, h) = grid.size();
        let depth = check_dimensions(w, h)?;
        let padded = grid.padded_with_wrap();
        let root = RegionView::new(&padded, h + 2, w + 2);
        let next = update_parallel(&self.cache, &root, self.fork_levels.min(depth));
        self.generations += 1;
        Grid::from_cells(w, h, next.cells().to_vec())
    }

    fn statistics(&self) -> String {
        let mut s = format!(
            "generations: {}\nfork levels: {}\n",
            NiceInt::from(self.generations),
            self.fork_levels
        );
        s += &self.cache.statistics();
        s
    }

    fn run_gc(&mut self) {
        self.cache.clear();
    }
}

use std::num::NonZeroUsize;

/// Interior side at which recursion stops and cells are counted directly.
///
/// Lowering it yields more, smaller and more reusable cache entries;
/// raising it trades them for fewer recursive calls and bigger leaves.
/// Must stay even and at least 2.
pub const LEAF_SIDE: usize = 4;

/// Eviction strategy of the region cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePolicy {
    /// Entries live as long as the cache; memory grows with the number of
    /// distinct regions ever seen.
    Unbounded,
    /// Keeps at most the given number of entries, dropping the least
    /// recently used one first.
    Lru(NonZeroUsize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub cache: CachePolicy,
    /// How many top levels of the recursion fork into scoped threads
    /// (parallel engine only; each level multiplies threads by 4).
    pub parallel_levels: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CachePolicy::Unbounded,
            parallel_levels: 2,
        }
    }
}

impl Config {
    pub fn with_cache_capacity(mut self, capacity: Option<usize>) -> Self {
        self.cache = match capacity.and_then(NonZeroUsize::new) {
            Some(cap) => CachePolicy::Lru(cap),
            None => CachePolicy::Unbounded,
        };
        self
    }

    pub fn with_parallel_levels(mut self, levels: u32) -> Self {
        self.parallel_levels = levels;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_means_unbounded() {
        let config = Config::default().with_cache_capacity(Some(0));
        assert_eq!(config.cache, CachePolicy::Unbounded);
        let config = Config::default().with_cache_capacity(Some(16));
        assert_eq!(config.cache, CachePolicy::Lru(NonZeroUsize::new(16).unwrap()));
    }
}

use crate::region::{Interior, RegionKey, RegionView};
use crate::utils::{percent, NiceInt};
use crate::CachePolicy;
use ahash::{AHashMap, RandomState};
use lru::LruCache;
use std::sync::Arc;

enum Store {
    Unbounded(AHashMap<RegionKey, Arc<Interior>>),
    Lru(LruCache<RegionKey, Arc<Interior>, RandomState>),
}

/// Memo table from region content to the region's next-generation interior.
///
/// Values never change once inserted: the rule is fixed, so a region always
/// evolves into the same interior.
pub struct RegionCache {
    store: Store,
    // how many lookups found the region
    hits: u64,
    // how many lookups did not
    misses: u64,
    // how many entries the LRU policy dropped
    evictions: u64,
}

impl RegionCache {
    pub fn new(policy: CachePolicy) -> Self {
        let store = match policy {
            CachePolicy::Unbounded => Store::Unbounded(AHashMap::new()),
            CachePolicy::Lru(cap) => Store::Lru(LruCache::with_hasher(cap, RandomState::new())),
        };
        Self {
            store,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    pub fn policy(&self) -> CachePolicy {
        match &self.store {
            Store::Unbounded(_) => CachePolicy::Unbounded,
            Store::Lru(m) => CachePolicy::Lru(m.cap()),
        }
    }

    /// Find the interior stored for `key`, counting a hit or a miss.
    pub fn get(&mut self, key: &RegionKey) -> Option<Arc<Interior>> {
        let found = match &mut self.store {
            Store::Unbounded(m) => m.get(key).cloned(),
            Store::Lru(m) => m.get(key).cloned(),
        };
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Same as [`get`](Self::get) without touching the counters or the
    /// recency order.
    pub fn peek(&self, region: &RegionView) -> Option<Arc<Interior>> {
        let key = region.key();
        match &self.store {
            Store::Unbounded(m) => m.get(&key).cloned(),
            Store::Lru(m) => m.peek(&key).cloned(),
        }
    }

    /// Store the interior computed for `key`. An existing entry is kept.
    pub fn insert(&mut self, key: RegionKey, interior: Arc<Interior>) {
        match &mut self.store {
            Store::Unbounded(m) => {
                m.entry(key).or_insert(interior);
            }
            Store::Lru(m) => {
                if m.contains(&key) {
                    return;
                }
                if m.push(key, interior).is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        match &self.store {
            Store::Unbounded(m) => m.len(),
            Store::Lru(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry; counters are kept.
    pub fn clear(&mut self) {
        match &mut self.store {
            Store::Unbounded(m) => m.clear(),
            Store::Lru(m) => m.clear(),
        }
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Approximate heap bytes held by keys and values.
    pub fn bytes_total(&self) -> usize {
        let entry = |k: &RegionKey, v: &Arc<Interior>| k.bytes_total() + v.bytes_total();
        match &self.store {
            Store::Unbounded(m) => m.iter().map(|(k, v)| entry(k, v)).sum(),
            Store::Lru(m) => m.iter().map(|(k, v)| entry(k, v)).sum(),
        }
    }

    pub fn statistics(&self) -> String {
        let mut s = String::new();
        s += &match self.policy() {
            CachePolicy::Unbounded => "region cache: unbounded\n".to_string(),
            CachePolicy::Lru(cap) => format!(
                "region cache: LRU, capacity {}\n",
                NiceInt::from_usize(cap.get())
            ),
        };
        s += &format!("entries: {}\n", NiceInt::from_usize(self.len()));
        s += &format!(
            "memory consumption: {} KB\n",
            NiceInt::from_usize(self.bytes_total() >> 10)
        );
        s += &format!(
            "misses / hits: {} / {} ({:.1}% hits)\n",
            NiceInt::from(self.misses),
            NiceInt::from(self.hits),
            percent(self.hits, self.hits + self.misses),
        );
        if self.evictions != 0 {
            s += &format!("evictions: {}\n", NiceInt::from(self.evictions));
        }
        s
    }
}

impl Default for RegionCache {
    fn default() -> Self {
        Self::new(CachePolicy::Unbounded)
    }
}

use std::collections::HashMap;

// Statistics for cache monitoring
#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// Unbounded in-memory cache for fetched API resources, keyed by cursor URL
/// or resource name. Entries live for the lifetime of the process; there is
/// no eviction and no expiry. The REPL is single-threaded, so no locking.
#[derive(Debug)]
pub struct FetchCache<T>
where
    T: Clone,
{
    store: HashMap<String, T>,
    stats: CacheStats,
}

impl<T> FetchCache<T>
where
    T: Clone,
{
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    pub fn get(&mut self, key: &str) -> Option<T> {
        match self.store.get(key) {
            Some(value) => {
                tracing::debug!("Cache hit for key: {}", key);
                self.stats.hits += 1;
                Some(value.clone())
            }
            None => {
                tracing::debug!("Cache miss for key: {}", key);
                self.stats.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, key: String, value: T) {
        let was_present = self.store.insert(key.clone(), value).is_some();
        if was_present {
            tracing::debug!("Updated existing cache entry: {}", key);
        } else {
            tracing::debug!("Inserted new cache entry: {}", key);
        }
        self.stats.inserts += 1;
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.store.keys().cloned().collect()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl<T> Default for FetchCache<T>
where
    T: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

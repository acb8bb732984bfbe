// patterns/cache.rs
use crate::error::GlobError;
use lru::LruCache;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{num::NonZeroUsize, sync::Mutex};

// Limit cache size to prevent uncontrolled memory growth
const MAX_CACHE_SIZE: usize = 1000;

/// Metrics for cache performance monitoring
#[derive(Clone, Debug)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

impl CacheMetrics {
    /// Calculates the cache hit ratio
    pub fn hit_ratio(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// Cache for compiled wildcard-segment regexes with LRU eviction
///
/// Wildcard segments recur heavily across patterns (`*`, `*.rs`, `*.txt`),
/// so compiled regexes are shared process-wide, keyed by regex source.
struct SegmentCache {
    cache: Mutex<LruCache<String, Regex>>,
    metrics: Mutex<CacheMetrics>,
}

impl SegmentCache {
    fn new() -> Self {
        Self {
            cache: Mutex::new(LruCache::new(NonZeroUsize::new(MAX_CACHE_SIZE).unwrap())),
            metrics: Mutex::new(CacheMetrics {
                hits: 0,
                misses: 0,
                size: 0,
            }),
        }
    }

    fn get(&self, key: &str) -> Option<Regex> {
        let mut cache = self.cache.lock().unwrap();
        let mut metrics = self.metrics.lock().unwrap();

        if let Some(re) = cache.get(key) {
            metrics.hits += 1;
            return Some(re.clone());
        }

        metrics.misses += 1;
        None
    }

    fn put(&self, key: String, value: Regex) {
        let mut cache = self.cache.lock().unwrap();
        let mut metrics = self.metrics.lock().unwrap();

        cache.put(key, value);
        metrics.size = cache.len();
    }

    fn metrics(&self) -> CacheMetrics {
        self.metrics.lock().unwrap().clone()
    }

    fn clear(&self) {
        let mut cache = self.cache.lock().unwrap();
        let mut metrics = self.metrics.lock().unwrap();

        cache.clear();
        metrics.size = 0;
    }
}

static SEGMENT_CACHE: Lazy<SegmentCache> = Lazy::new(SegmentCache::new);

/// Retrieves a compiled Regex from cache or compiles and caches it
///
/// # Errors
///
/// Returns `GlobError::Regex` when the regex engine rejects the pattern
/// (its built-in size limit covers pathological character classes).
pub fn get_or_compile(pat: &str) -> Result<Regex, GlobError> {
    if let Some(cached) = SEGMENT_CACHE.get(pat) {
        return Ok(cached);
    }

    let re = Regex::new(pat).map_err(GlobError::Regex)?;
    SEGMENT_CACHE.put(pat.to_string(), re.clone());
    Ok(re)
}

/// Returns metrics for the segment regex cache
pub fn cache_metrics() -> CacheMetrics {
    SEGMENT_CACHE.metrics()
}

/// Clears the segment regex cache
pub fn clear_cache() {
    SEGMENT_CACHE.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit_then_clear_forces_recompile() {
        // Key is unique to this test; hit/miss counters are monotonic, so
        // the `>` checks hold even with other tests using the cache
        let first = get_or_compile("^cachecheck[0-9]$").unwrap();
        let before = cache_metrics();
        let second = get_or_compile("^cachecheck[0-9]$").unwrap();
        let after = cache_metrics();

        assert_eq!(first.as_str(), second.as_str());
        assert!(after.hits > before.hits);

        // After a clear the same key must recompile (a fresh miss)
        clear_cache();
        let before = cache_metrics();
        get_or_compile("^cachecheck[0-9]$").unwrap();
        let after = cache_metrics();
        assert!(after.misses > before.misses);
    }

    #[test]
    fn test_hit_ratio_empty() {
        let m = CacheMetrics {
            hits: 0,
            misses: 0,
            size: 0,
        };
        assert_eq!(m.hit_ratio(), 0.0);
    }
}

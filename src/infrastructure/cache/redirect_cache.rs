//! Bounded, TTL-expiring in-memory cache for redirect lookups.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::domain::entities::ResolvedLink;

/// Default entry lifetime: five minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Default soft capacity bound.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
struct CacheEntry {
    link: ResolvedLink,
    expires_at: Instant,
}

/// Concurrent map from lowercase short code to its resolved destination.
///
/// Eviction is opportunistic: an expired entry behaves as a miss on read
/// but stays in the map until an insert pushes the entry count past the
/// capacity bound, which triggers one sweep pass removing everything
/// already expired. When nothing has expired yet the cache may temporarily
/// exceed its bound; this is a soft limit, not an LRU.
///
/// One instance is owned by each
/// [`crate::application::services::RedirectService`]; there is no
/// process-wide singleton, so tests and multiple resolvers stay isolated.
#[derive(Debug)]
pub struct RedirectCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    capacity: usize,
}

impl RedirectCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            capacity,
        }
    }

    /// Returns the cached destination when present and not yet expired.
    ///
    /// An expired entry is a miss; it is not removed here.
    pub fn get(&self, code: &str) -> Option<ResolvedLink> {
        let entries = self.lock();

        match entries.get(code) {
            Some(entry) if entry.expires_at > Instant::now() => {
                metrics::counter!("redirect_cache_hits").increment(1);
                Some(entry.link.clone())
            }
            _ => {
                metrics::counter!("redirect_cache_misses").increment(1);
                None
            }
        }
    }

    /// Inserts or overwrites an entry with expiry `now + TTL`, then sweeps
    /// expired entries if the capacity bound is exceeded.
    pub fn put(&self, code: &str, link: ResolvedLink) {
        let expires_at = Instant::now() + self.ttl;
        let mut entries = self.lock();

        entries.insert(code.to_string(), CacheEntry { link, expires_at });

        if entries.len() > self.capacity {
            let now = Instant::now();
            let before = entries.len();
            entries.retain(|_, entry| entry.expires_at > now);
            let swept = before - entries.len();
            if swept > 0 {
                metrics::counter!("redirect_cache_swept").increment(swept as u64);
                tracing::debug!(swept, remaining = entries.len(), "swept expired cache entries");
            }
        }
    }

    /// Removes a single entry, used when a link is deleted or retargeted.
    pub fn invalidate(&self, code: &str) {
        self.lock().remove(code);
    }

    /// Current entry count, expired entries included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        // A poisoned lock only means another thread panicked mid-mutation of
        // a map we can still safely read; recover the guard.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RedirectCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn link(id: i64, url: &str) -> ResolvedLink {
        ResolvedLink {
            record_id: id,
            long_url: url.to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let cache = RedirectCache::default();
        cache.put("abcd", link(7, "https://example.com/"));

        let hit = cache.get("abcd").unwrap();
        assert_eq!(hit.record_id, 7);
        assert_eq!(hit.long_url, "https://example.com/");
    }

    #[test]
    fn test_missing_code_is_a_miss() {
        let cache = RedirectCache::default();
        assert!(cache.get("nope").is_none());
    }

    #[test]
    fn test_expired_entry_is_a_miss_but_not_evicted() {
        let cache = RedirectCache::new(Duration::ZERO, DEFAULT_CAPACITY);
        cache.put("abcd", link(1, "https://example.com/"));

        assert!(cache.get("abcd").is_none());
        // Eviction is opportunistic; the dead entry still occupies a slot.
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_overwrite_replaces_destination() {
        let cache = RedirectCache::default();
        cache.put("abcd", link(1, "https://old.example.com/"));
        cache.put("abcd", link(2, "https://new.example.com/"));

        let hit = cache.get("abcd").unwrap();
        assert_eq!(hit.record_id, 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_past_capacity_sweeps_expired_entries() {
        let cache = RedirectCache::new(Duration::ZERO, 5);

        for i in 0..6 {
            cache.put(&format!("code{i}"), link(i, "https://example.com/"));
        }

        // The sixth insert exceeded the bound and every entry was already
        // expired, so the sweep drains the map.
        assert!(cache.len() < 6);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_unexpired_entries_survive_the_sweep() {
        let cache = RedirectCache::new(Duration::from_secs(60), 3);

        for i in 0..5 {
            cache.put(&format!("code{i}"), link(i, "https://example.com/"));
        }

        // Nothing is expired, so the bound is soft and nothing is lost.
        assert_eq!(cache.len(), 5);
        for i in 0..5 {
            assert!(cache.get(&format!("code{i}")).is_some());
        }
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let cache = RedirectCache::default();
        cache.put("abcd", link(1, "https://example.com/"));
        cache.invalidate("abcd");
        assert!(cache.get("abcd").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        let cache = Arc::new(RedirectCache::new(Duration::from_secs(60), 50));
        let mut handles = Vec::new();

        for t in 0..8 {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                for i in 0..200 {
                    let code = format!("code{}", i % 20);
                    if t % 2 == 0 {
                        cache.put(&code, ResolvedLink {
                            record_id: i,
                            long_url: format!("https://example.com/{i}"),
                        });
                    } else {
                        let _ = cache.get(&code);
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 20);
    }
}

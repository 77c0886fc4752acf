//! TTL cache with a caller-supplied clock.
//!
//! The engine itself holds no caches. Services that want to remember derived
//! data (department counts per semester, for example) own one of these and
//! pass in the clock, so expiry is decided by the clock they inject and not by
//! wall time or process lifetime.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::trace;

/// Source of "now" for cache expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.lock().unwrap_or_else(|e| e.into_inner());
        if let Ok(delta) = chrono::Duration::from_std(by) {
            *guard += delta;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// A cached value with metadata.
#[derive(Clone)]
struct CachedEntry<V> {
    value: V,
    /// When this entry was cached, per the cache's clock
    cached_at: DateTime<Utc>,
    /// TTL for this specific entry
    ttl: Duration,
}

impl<V> CachedEntry<V> {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match (now - self.cached_at).to_std() {
            Ok(elapsed) => elapsed >= self.ttl,
            // Clock moved backwards; treat as fresh
            Err(_) => false,
        }
    }
}

/// Thread-safe key -> (value, timestamp) cache.
///
/// Uses DashMap for concurrent access without external locking.
pub struct TtlCache<K, V, C = SystemClock>
where
    K: Eq + Hash,
{
    entries: DashMap<K, CachedEntry<V>>,
    default_ttl: Duration,
    clock: C,
}

impl<K, V> TtlCache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a wall-clock cache with the given default TTL.
    pub fn with_system_clock(default_ttl: Duration) -> Self {
        Self::new(default_ttl, SystemClock)
    }
}

impl<K, V, C> TtlCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    /// Creates a cache with the specified default TTL and clock.
    pub fn new(default_ttl: Duration, clock: C) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
            clock,
        }
    }

    /// Gets a cached value if it exists and hasn't expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired(now) {
                return Some(entry.value.clone());
            }
        }
        // Re-checked under the shard lock so a concurrent fresh insert survives
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            trace!("Evicted expired cache entry");
        }
        None
    }

    /// Returns the cached value, computing and caching it on a miss.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = compute();
        self.insert(key, value.clone());
        value
    }

    /// Inserts a value with the default TTL.
    pub fn insert(&self, key: K, value: V) {
        self.insert_with_ttl(key, value, self.default_ttl);
    }

    /// Inserts a value with a custom TTL.
    pub fn insert_with_ttl(&self, key: K, value: V, ttl: Duration) {
        self.entries.insert(
            key,
            CachedEntry {
                value,
                cached_at: self.clock.now(),
                ttl,
            },
        );
    }

    /// Invalidates (removes) a cached entry.
    pub fn invalidate(&self, key: &K) {
        self.entries.remove(key);
    }

    /// Clears all entries from the cache.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Returns the number of entries in the cache (including expired ones).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes expired entries from the cache.
    pub fn cleanup_expired(&self) {
        let now = self.clock.now();
        self.entries.retain(|_, entry| !entry.is_expired(now));
    }

    /// Gets cache statistics.
    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now();
        let mut total = 0;
        let mut expired = 0;

        for entry in self.entries.iter() {
            total += 1;
            if entry.is_expired(now) {
                expired += 1;
            }
        }

        CacheStats {
            total_entries: total,
            expired_entries: expired,
            active_entries: total - expired,
        }
    }
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub active_entries: usize,
}

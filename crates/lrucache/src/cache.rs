//! Thread-safe cache front: the LRU core behind a reader-writer lock.

use std::hash::Hash;

use parking_lot::RwLock;

use crate::lru::LruCore;
use crate::stats::CacheStats;

/// Fixed-capacity, thread-safe LRU cache.
///
/// All methods take `&self`; interior locking makes the cache safe to share
/// across threads behind an `Arc`. Reordering operations (`add`, `get`,
/// `remove`, `clear`) serialize on the write lock, while `peek`, `contains`,
/// and `len` share the read lock.
pub struct LruCache<K, V> {
    /// Recency list and key index, guarded as one unit.
    inner: RwLock<LruCore<K, V>>,

    /// Traffic counters, updated outside the lock.
    stats: CacheStats,

    /// Maximum entry count, fixed at construction.
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A capacity of 0 is coerced to 1.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries before eviction kicks in
    pub fn new(capacity: usize) -> Self {
        let inner = LruCore::new(capacity);
        let capacity = inner.capacity();

        Self {
            inner: RwLock::new(inner),
            stats: CacheStats::new(),
            capacity,
        }
    }

    /// Insert a key-value pair, marking it most-recently-used.
    ///
    /// Overwriting an existing key updates the value in place and never
    /// evicts. Inserting a new key into a full cache evicts the
    /// least-recently-used entry first.
    ///
    /// # Arguments
    /// * `key` - Lookup key
    /// * `value` - Value to store under `key`
    pub fn add(&self, key: K, value: V) {
        let evicted = {
            let mut inner = self.inner.write();
            inner.add(key, value)
        };

        self.stats.record_insert();
        if evicted.is_some() {
            self.stats.record_eviction();
        }
    }

    /// Look up a key, marking it most-recently-used on a hit.
    ///
    /// The promotion mutates the recency list, so this takes the write lock
    /// even though it reads. Use [`LruCache::peek`] when the access should
    /// not affect eviction order.
    ///
    /// # Arguments
    /// * `key` - Key to look up
    ///
    /// # Returns
    /// * `Option<V>` - Clone of the cached value, or `None` on a miss
    pub fn get(&self, key: &K) -> Option<V> {
        let value = {
            let mut inner = self.inner.write();
            inner.get(key).cloned()
        };

        match value {
            Some(value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Look up a key without disturbing recency order.
    ///
    /// Takes only the read lock and leaves the hit/miss counters alone, so
    /// concurrent peeks proceed in parallel.
    ///
    /// # Arguments
    /// * `key` - Key to look up
    ///
    /// # Returns
    /// * `Option<V>` - Clone of the cached value, or `None` on a miss
    pub fn peek(&self, key: &K) -> Option<V> {
        self.inner.read().peek(key).cloned()
    }

    /// Whether `key` is currently cached. Does not affect recency order.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }

    /// Remove a key from the cache.
    ///
    /// # Arguments
    /// * `key` - Key to drop
    ///
    /// # Returns
    /// * `bool` - Whether the key was present
    pub fn remove(&self, key: &K) -> bool {
        self.inner.write().remove(key).is_some()
    }

    /// Current number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Maximum entry count, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry and reset the statistics. Capacity is unchanged.
    pub fn clear(&self) {
        self.inner.write().clear();
        self.stats.reset();
    }

    /// Traffic counters for this cache.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

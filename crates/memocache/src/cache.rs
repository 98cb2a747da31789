//! MemoCache: fixed-capacity LRU front for a data provider

use parking_lot::Mutex;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::lru::LruList;
use crate::provider::DataProvider;
use crate::stats::MissCounter;

/// Memoizing cache that answers repeated lookups in O(1) and fills itself
/// from a [`DataProvider`] on miss, evicting the least-recently-used entry
/// when full.
///
/// A single mutex guards the index and recency list together, including the
/// provider call on the miss path, so concurrent `get` calls observe a
/// strict total order. A value is fetched once at insertion and never
/// re-fetched while it stays cached.
pub struct MemoCache<K, V, P> {
    /// Consulted on miss, at most once per miss.
    provider: P,

    /// Index + recency list; their joint update must be atomic.
    list: Mutex<LruList<K, V>>,

    /// Counts `get` calls not satisfied from the index.
    misses: MissCounter,

    /// Fixed at construction.
    capacity: usize,
}

impl<K, V, P> MemoCache<K, V, P>
where
    K: Hash + Eq + Clone,
    V: Clone,
    P: DataProvider<K, V>,
{
    /// Create a cache over `provider` holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(provider: P, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        Ok(Self {
            provider,
            list: Mutex::new(LruList::new(capacity)),
            misses: MissCounter::new(),
            capacity,
        })
    }

    /// Look up `key`, consulting the provider on miss.
    ///
    /// A hit promotes the entry to most-recently-used and returns the stored
    /// value without touching the provider or the miss counter. A miss bumps
    /// the counter and queries the provider once: `None` leaves the cache
    /// unchanged, a value is inserted as the most-recently-used entry after
    /// evicting the least-recently-used one iff the cache is full.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut list = self.list.lock();

        if let Some(value) = list.get_promote(key) {
            return Some(value.clone());
        }

        self.misses.record();
        let value = self.provider.fetch(key)?;
        list.insert(key.clone(), value.clone());
        Some(value)
    }

    /// Cumulative number of `get` calls that consulted the provider.
    pub fn num_misses(&self) -> u64 {
        self.misses.get()
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.list.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `key` is currently cached. Does not promote or count as a
    /// miss.
    pub fn contains(&self, key: &K) -> bool {
        self.list.lock().contains(key)
    }
}

//! The data provider capability consulted on cache misses.

use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;

/// Source of values for keys the cache does not hold.
///
/// The cache calls [`fetch`](DataProvider::fetch) at most once per miss and
/// never speculatively. `None` means the provider has no value for the key;
/// the cache reports that as an absent result rather than an error.
pub trait DataProvider<K, V> {
    /// Look up the value for `key`, or `None` if the provider has none.
    fn fetch(&self, key: &K) -> Option<V>;
}

impl<K, V, F> DataProvider<K, V> for F
where
    F: Fn(&K) -> Option<V>,
{
    fn fetch(&self, key: &K) -> Option<V> {
        self(key)
    }
}

/// In-memory provider backed by a hash map. Partial by construction: only
/// keys that were [`add`](MapProvider::add)ed resolve.
#[derive(Debug)]
pub struct MapProvider<K, V> {
    entries: HashMap<K, V, RandomState>,
}

impl<K, V> Default for MapProvider<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::default(),
        }
    }
}

impl<K, V> MapProvider<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Create an empty provider.
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Register a value for a key.
    pub fn add(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Number of keys the provider can resolve.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the provider resolves no keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> DataProvider<K, V> for MapProvider<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    fn fetch(&self, key: &K) -> Option<V> {
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_provider_resolves_added_keys() {
        let mut provider = MapProvider::new();
        provider.add(1, "one");

        assert_eq!(provider.fetch(&1), Some("one"));
        assert_eq!(provider.fetch(&2), None);
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn closures_are_providers() {
        let provider = |key: &u32| if *key < 10 { Some(key * 2) } else { None };

        assert_eq!(provider.fetch(&3), Some(6));
        assert_eq!(provider.fetch(&10), None);
    }
}

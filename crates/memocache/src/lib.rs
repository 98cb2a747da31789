//! # memocache
//!
//! Fixed-capacity memoizing cache with strict LRU eviction, sitting in front
//! of a slow or expensive data provider.
//!
//! ## Architecture
//! - **Index**: AHash-hashed map from key to slot index (O(1))
//! - **Recency list**: doubly-linked list threaded through a slot arena,
//!   LRU at the front, MRU at the back (O(1) promote and evict)
//! - **Provider**: consulted once per miss; an absent value leaves the
//!   cache untouched
//!
//! ```
//! use memocache::{MapProvider, MemoCache};
//!
//! let mut provider = MapProvider::new();
//! provider.add("k", 42);
//!
//! let cache = MemoCache::new(provider, 8).unwrap();
//! assert_eq!(cache.get(&"k"), Some(42)); // miss, filled from provider
//! assert_eq!(cache.get(&"k"), Some(42)); // hit
//! assert_eq!(cache.num_misses(), 1);
//! ```

#![warn(missing_docs)]

mod cache;
mod error;
mod lru;
mod provider;
mod stats;

pub use cache::MemoCache;
pub use error::{Error, Result};
pub use provider::{DataProvider, MapProvider};
pub use stats::MissCounter;

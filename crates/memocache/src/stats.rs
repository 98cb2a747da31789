//! Miss counting.

use std::sync::atomic::{AtomicU64, Ordering};

/// Cumulative count of `get` calls that had to consult the provider.
///
/// Atomic so it lives outside the engine's lock and can be read without
/// taking it. Monotonically non-decreasing, starts at zero.
#[derive(Debug, Default)]
pub struct MissCounter {
    misses: AtomicU64,
}

impl MissCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one miss.
    pub fn record(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Total misses so far.
    pub fn get(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

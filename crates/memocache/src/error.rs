//! Error types for memocache

use std::fmt;

/// Result type alias for memocache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction
///
/// Provider misses are not errors: a `get` for a key the provider cannot
/// supply returns `None`.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Cache constructed with capacity 0
    ZeroCapacity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroCapacity => write!(f, "Cache capacity must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}

//! Error types for indexed heap operations.

use thiserror::Error;

/// Result type alias for heap operations.
pub type HeapResult<T> = Result<T, HeapError>;

/// Errors raised by [`IndexedHeap`](super::IndexedHeap) operations.
///
/// Every variant is caused by caller-supplied data and is reported before the
/// heap is touched, so a failed call leaves the heap exactly as it was.
///
/// Lookup misses (`remove` on an absent identity, `pop`/`peek` on an empty
/// heap) are not errors; they are reported as `None`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The priority extractor did not yield a number (it returned `NaN`).
    #[error("{operation}: element has no numeric priority")]
    InvalidPriority {
        /// The operation that rejected the element.
        operation: &'static str,
    },

    /// An element with the same identity is already held.
    ///
    /// Each identity maps to exactly one slot, so a second element with the
    /// same identity cannot be tracked. Remove the held element first.
    #[error("insert: an element with the same identity is already in the heap")]
    DuplicateIdentity,

    /// Heap configuration rejected by [`HeapConfig::validate`](super::HeapConfig::validate).
    #[error("invalid heap configuration: {0}")]
    InvalidConfig(String),
}

impl HeapError {
    pub(crate) fn invalid_priority(operation: &'static str) -> Self {
        HeapError::InvalidPriority { operation }
    }
}

//! Heap ordering mode and construction parameters.

use super::errors::{HeapError, HeapResult};

/// Ordering mode of a heap, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeapMode {
    /// The root holds the smallest priority.
    #[default]
    Min,
    /// The root holds the largest priority.
    Max,
}

impl HeapMode {
    /// Returns true if an element with priority `parent` may sit above one
    /// with priority `child`.
    ///
    /// Equal priorities are always in order.
    #[inline]
    pub fn in_order(self, parent: f64, child: f64) -> bool {
        match self {
            HeapMode::Min => parent <= child,
            HeapMode::Max => parent >= child,
        }
    }
}

/// Construction parameters for an [`IndexedHeap`](super::IndexedHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeapConfig {
    /// Ordering mode (default: `Min`).
    pub mode: HeapMode,
    /// Slots reserved up front for elements and the position index (default: 0).
    pub initial_capacity: usize,
}

impl HeapConfig {
    /// Largest accepted `initial_capacity`.
    ///
    /// Passing validation does not guarantee the memory exists; building a
    /// heap reports a failed reservation as [`HeapError::InvalidConfig`].
    pub const MAX_INITIAL_CAPACITY: usize = u32::MAX as usize;

    /// Builder: set the ordering mode.
    #[must_use]
    pub fn mode(mut self, mode: HeapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder: set the number of pre-reserved slots.
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Checks the configuration before a heap is built from it.
    pub fn validate(self) -> HeapResult<Self> {
        if self.initial_capacity > Self::MAX_INITIAL_CAPACITY {
            return Err(HeapError::InvalidConfig(format!(
                "initial_capacity must be <= {}, got {}",
                Self::MAX_INITIAL_CAPACITY,
                self.initial_capacity
            )));
        }
        Ok(self)
    }
}

/// Returns the cargo features this build was compiled with.
pub fn enabled_features() -> Vec<String> {
    #[allow(unused_mut)]
    let mut features = Vec::new();

    #[cfg(feature = "serde")]
    features.push("serde".to_string());

    #[cfg(feature = "tracing")]
    features.push("tracing".to_string());

    features
}

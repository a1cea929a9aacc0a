//! # frontier-heap - Indexed priority queue for graph algorithms
//!
//! A binary heap that also tracks where each element lives, so any held
//! element can be looked up in O(1) and removed in O(log n). It is meant to
//! back traversal and optimization algorithms (shortest paths, centrality
//! computations, frontier scheduling) that need both "extract the extreme
//! element" and "drop this particular element" operations.
//!
//! ## Architecture
//!
//! - **heap**: the [`IndexedHeap`] itself
//! - **heap::config**: ordering mode and construction parameters
//! - **heap::errors**: [`HeapError`] and the [`HeapResult`] alias
//! - **heap::extract**: pluggable priority and identity extraction
//! - **heap::layout**: slot arithmetic for the array-backed tree
//!
//! ## Usage
//!
//! ```rust
//! use frontier_heap::{HeapMode, IndexedHeap};
//!
//! #[derive(Debug)]
//! struct Frontier {
//!     node: u32,
//!     dist: f64,
//! }
//!
//! let mut open = IndexedHeap::with_extractors(
//!     HeapMode::Min,
//!     |f: &Frontier| f.dist,
//!     |f: &Frontier| f.node,
//! );
//! open.insert(Frontier { node: 1, dist: 4.0 })?;
//! open.insert(Frontier { node: 2, dist: 1.5 })?;
//!
//! // relax node 1: remove, then reinsert with the shorter distance
//! if let Some(mut f) = open.remove_by_id(&1) {
//!     f.dist = 0.5;
//!     open.insert(f)?;
//! }
//! assert_eq!(open.pop().map(|f| f.node), Some(1));
//! # Ok::<(), frontier_heap::HeapError>(())
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`HeapMode`] and [`HeapConfig`]
//! - `tracing`: debug/trace events for rejected or missed operations

#![forbid(unsafe_code)]

pub mod heap;

// Re-export commonly used types
pub use heap::{
    enabled_features, AsPriority, HeapConfig, HeapError, HeapMode, HeapResult, Identify,
    IndexedHeap, NumericPriority, Prioritize, SelfIdentity,
};

//! Indexed binary heap.
//!
//! This module provides:
//! - **config**: ordering mode and construction parameters
//! - **errors**: error type for rejected insertions and removals
//! - **extract**: priority and identity extraction strategies
//! - **layout**: parent/child slot arithmetic
//!
//! [`IndexedHeap`] is an array-backed binary heap that also keeps a map from
//! each element's identity to its current slot, so arbitrary elements can be
//! found in O(1) and removed in O(log n).

pub mod config;
pub mod errors;
pub mod extract;
pub mod layout;

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

pub use config::{enabled_features, HeapConfig, HeapMode};
pub use errors::{HeapError, HeapResult};
pub use extract::{AsPriority, Identify, NumericPriority, Prioritize, SelfIdentity};

/// A stored element with its priority and identity, both computed once on insert.
#[derive(Debug, Clone)]
struct Slot<T, K> {
    item: T,
    priority: f64,
    id: K,
}

/// Binary heap with an identity → slot index.
///
/// The heap is parameterized by a [`Prioritize`] strategy `P` and an
/// [`Identify`] strategy `I`. By default elements are their own priority and
/// their own identity, which suits integer or numeric-string elements.
///
/// # Ordering
///
/// In [`HeapMode::Min`] the root holds the smallest priority and in
/// [`HeapMode::Max`] the largest. The relative order of elements with equal
/// priority is unspecified and may change across inserts and removals.
///
/// # Priority updates
///
/// There is no in-place priority update. Elements are owned by the heap and
/// their priority is fixed when they are inserted; to change it, remove the
/// element and insert it again with the new priority.
///
/// # Identities
///
/// Each identity is held at most once. Inserting a second element with an
/// identity that is already present fails with [`HeapError::DuplicateIdentity`].
///
/// # Concurrency
///
/// The heap does no internal locking. Share it between threads behind a lock
/// held for the duration of each call.
///
/// # Example
///
/// ```
/// use frontier_heap::{HeapMode, IndexedHeap};
///
/// let mut heap = IndexedHeap::with_mode(HeapMode::Max);
/// for p in [5, 3, 8, 1] {
///     heap.insert(p).unwrap();
/// }
/// assert_eq!(heap.remove(&3).unwrap(), Some(3));
/// assert_eq!(heap.pop(), Some(8));
/// assert_eq!(heap.len(), 2);
/// ```
pub struct IndexedHeap<T, P = NumericPriority, I = SelfIdentity>
where
    I: Identify<T>,
{
    mode: HeapMode,
    slots: Vec<Slot<T, I::Id>>,
    positions: FxHashMap<I::Id, usize>,
    priority_fn: P,
    identity_fn: I,
}

impl<T> IndexedHeap<T>
where
    T: AsPriority + Hash + Eq + Clone,
{
    /// Creates an empty min-heap whose elements are their own priority and identity.
    pub fn new() -> Self {
        Self::with_mode(HeapMode::Min)
    }

    /// Creates an empty heap in `mode` with the default extractors.
    pub fn with_mode(mode: HeapMode) -> Self {
        Self::with_extractors(mode, NumericPriority, SelfIdentity)
    }
}

impl<T> Default for IndexedHeap<T>
where
    T: AsPriority + Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, I> IndexedHeap<T, P, I>
where
    P: Prioritize<T>,
    I: Identify<T>,
{
    /// Creates an empty heap with custom priority and identity extractors.
    pub fn with_extractors(mode: HeapMode, priority_fn: P, identity_fn: I) -> Self {
        Self {
            mode,
            slots: Vec::new(),
            positions: FxHashMap::default(),
            priority_fn,
            identity_fn,
        }
    }

    /// Creates an empty heap from a validated [`HeapConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidConfig`] if the configuration is rejected
    /// or the requested capacity cannot be reserved.
    pub fn from_config(config: HeapConfig, priority_fn: P, identity_fn: I) -> HeapResult<Self> {
        let config = config.validate()?;
        let capacity = config.initial_capacity;

        let mut slots = Vec::new();
        slots.try_reserve(capacity).map_err(|err| {
            HeapError::InvalidConfig(format!("cannot reserve {capacity} slots: {err}"))
        })?;
        let mut positions = FxHashMap::default();
        positions.try_reserve(capacity).map_err(|err| {
            HeapError::InvalidConfig(format!("cannot reserve {capacity} index entries: {err}"))
        })?;

        Ok(Self {
            mode: config.mode,
            slots,
            positions,
            priority_fn,
            identity_fn,
        })
    }

    /// Number of held elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ordering mode chosen at construction.
    #[inline]
    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    /// The configured priority extractor.
    pub fn priority_fn(&self) -> &P {
        &self.priority_fn
    }

    /// The configured identity extractor.
    pub fn identity_fn(&self) -> &I {
        &self.identity_fn
    }

    /// Evaluates the configured priority extractor on `item`.
    pub fn priority_of(&self, item: &T) -> f64 {
        self.priority_fn.priority(item)
    }

    /// Evaluates the configured identity extractor on `item`.
    pub fn identity_of(&self, item: &T) -> I::Id {
        self.identity_fn.identity(item)
    }

    /// Returns the extreme element (minimum or maximum per mode) without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.slots.first().map(|slot| &slot.item)
    }

    /// Priority of the extreme element, as computed when it was inserted.
    pub fn peek_priority(&self) -> Option<f64> {
        self.slots.first().map(|slot| slot.priority)
    }

    /// Elements in backing-array order (slot 0 first).
    ///
    /// Only the root position is meaningful for ordering; the rest of the
    /// sequence follows heap order, not sorted order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.slots.iter().map(|slot| &slot.item)
    }

    /// Copy of the backing sequence in slot order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Whether an element with the same identity as `item` is held.
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(&self.identity_fn.identity(item))
    }

    /// Whether an element with identity `id` is held.
    pub fn contains_id<Q>(&self, id: &Q) -> bool
    where
        I::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(id)
    }

    /// The held element with identity `id`.
    pub fn get<Q>(&self, id: &Q) -> Option<&T>
    where
        I::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = *self.positions.get(id)?;
        self.slots.get(slot).map(|slot| &slot.item)
    }

    /// Current slot of the element with identity `id`.
    pub fn position_of<Q>(&self, id: &Q) -> Option<usize>
    where
        I::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(id).copied()
    }

    /// Inserts `item` and restores heap order by sifting it up.
    ///
    /// # Errors
    ///
    /// - [`HeapError::InvalidPriority`] if the priority extractor yields `NaN`.
    /// - [`HeapError::DuplicateIdentity`] if an element with the same identity
    ///   is already held.
    ///
    /// The heap is unchanged on error.
    pub fn insert(&mut self, item: T) -> HeapResult<()> {
        let priority = self.priority_fn.priority(&item);
        if priority.is_nan() {
            #[cfg(feature = "tracing")]
            tracing::debug!("insert rejected: element has no numeric priority");
            return Err(HeapError::invalid_priority("insert"));
        }

        let slot = self.slots.len();
        let id = match self.positions.entry(self.identity_fn.identity(&item)) {
            Entry::Occupied(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("insert rejected: identity already held");
                return Err(HeapError::DuplicateIdentity);
            }
            Entry::Vacant(entry) => {
                let id = entry.key().clone();
                entry.insert(slot);
                id
            }
        };

        self.slots.push(Slot { item, priority, id });
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the extreme element, or `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.slots.is_empty() {
            return None;
        }
        Some(self.take_slot(0))
    }

    /// Removes the held element whose identity matches `probe`'s.
    ///
    /// `probe` only needs to carry the same identity as the held element; the
    /// element returned is the held one.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidPriority`] if `probe` has no numeric
    /// priority, whether or not a matching element is held.
    pub fn remove(&mut self, probe: &T) -> HeapResult<Option<T>> {
        if self.priority_fn.priority(probe).is_nan() {
            #[cfg(feature = "tracing")]
            tracing::debug!("remove rejected: probe has no numeric priority");
            return Err(HeapError::invalid_priority("remove"));
        }
        let id = self.identity_fn.identity(probe);
        Ok(self.remove_by_id(&id))
    }

    /// Removes the element with identity `id`, or returns `None` if it is not held.
    pub fn remove_by_id<Q>(&mut self, id: &Q) -> Option<T>
    where
        I::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&slot) = self.positions.get(id) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(len = self.slots.len(), "remove: identity not held");
            return None;
        };
        Some(self.take_slot(slot))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.positions.clear();
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
        self.positions.reserve(additional);
    }

    /// Number of elements the backing array can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Inserts every element of `items` in order, stopping at the first failure.
    ///
    /// Returns the number of elements inserted. Elements inserted before a
    /// failure stay in the heap.
    pub fn try_extend<It>(&mut self, items: It) -> HeapResult<usize>
    where
        It: IntoIterator<Item = T>,
    {
        let mut inserted = 0;
        for item in items {
            self.insert(item)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Drains the heap in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.slots.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Detaches the element at `slot`, filling the hole with the last element.
    fn take_slot(&mut self, slot: usize) -> T {
        let removed = self.slots.swap_remove(slot);
        self.positions.remove(&removed.id);

        if slot < self.slots.len() {
            if let Some(pos) = self.positions.get_mut(&self.slots[slot].id) {
                *pos = slot;
            }
            // Only one direction can move the element; trying both is harmless.
            self.sift_up(slot);
            self.sift_down(slot);
        }

        removed.item
    }

    /// Swaps two slots and records both new positions in the index.
    ///
    /// Every structural move goes through here.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        for slot in [a, b] {
            if let Some(pos) = self.positions.get_mut(&self.slots[slot].id) {
                *pos = slot;
            }
        }
    }

    #[inline]
    fn in_order(&self, parent: usize, child: usize) -> bool {
        self.mode
            .in_order(self.slots[parent].priority, self.slots[child].priority)
    }

    fn sift_up(&mut self, mut i: usize) {
        while let Some(parent) = layout::parent(i) {
            if self.in_order(parent, i) {
                break;
            }
            self.swap_slots(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.slots.len();
        loop {
            let left = layout::left_child(i);
            let right = layout::right_child(i);
            let mut target = None;

            if left < len && !self.in_order(i, left) {
                target = Some(left);
            }
            // Right wins only if it also precedes the left child.
            if right < len && !self.in_order(i, right) && !self.in_order(left, right) {
                target = Some(right);
            }

            let Some(child) = target else {
                break;
            };
            self.swap_slots(i, child);
            i = child;
        }
    }
}

impl<T, P, I> Clone for IndexedHeap<T, P, I>
where
    T: Clone,
    P: Clone,
    I: Identify<T> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            slots: self.slots.clone(),
            positions: self.positions.clone(),
            priority_fn: self.priority_fn.clone(),
            identity_fn: self.identity_fn.clone(),
        }
    }
}

impl<T, P, I> fmt::Debug for IndexedHeap<T, P, I>
where
    T: fmt::Debug,
    I: Identify<T>,
    I::Id: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedHeap")
            .field("mode", &self.mode)
            .field("len", &self.slots.len())
            .field(
                "elements",
                &self.slots.iter().map(|slot| &slot.item).collect::<Vec<_>>(),
            )
            .field("positions", &self.positions)
            .finish()
    }
}

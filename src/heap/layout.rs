//! Index arithmetic for a complete binary tree stored in a flat array.
//!
//! The node at slot `i` has children at `2i + 1` and `2i + 2`; every slot
//! except the root has its parent at `(i + 1) / 2 - 1`.

/// Parent slot of `i`, or `None` for the root.
#[inline]
pub fn parent(i: usize) -> Option<usize> {
    if i == 0 {
        None
    } else {
        Some((i + 1) / 2 - 1)
    }
}

/// Left child slot of `i`.
#[inline]
pub fn left_child(i: usize) -> usize {
    2 * i + 1
}

/// Right child slot of `i`.
#[inline]
pub fn right_child(i: usize) -> usize {
    2 * i + 2
}

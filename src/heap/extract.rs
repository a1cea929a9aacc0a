//! Priority and identity extraction strategies.
//!
//! A heap never inspects its elements directly. It asks a [`Prioritize`]
//! implementation for each element's priority and an [`Identify`]
//! implementation for the key its position index is built on.
//!
//! Plain closures work for both:
//!
//! ```
//! use frontier_heap::{HeapMode, IndexedHeap};
//!
//! struct Tentative { node: u32, dist: f64 }
//!
//! let mut frontier = IndexedHeap::with_extractors(
//!     HeapMode::Min,
//!     |t: &Tentative| t.dist,
//!     |t: &Tentative| t.node,
//! );
//! frontier.insert(Tentative { node: 7, dist: 2.5 }).unwrap();
//! assert_eq!(frontier.peek().map(|t| t.node), Some(7));
//! ```

use std::hash::Hash;

/// Computes the priority of an element.
///
/// Returning `NaN` marks the element as having no usable priority; the heap
/// rejects it with [`HeapError::InvalidPriority`](super::HeapError::InvalidPriority).
pub trait Prioritize<T> {
    fn priority(&self, item: &T) -> f64;
}

impl<T, F> Prioritize<T> for F
where
    F: Fn(&T) -> f64,
{
    #[inline]
    fn priority(&self, item: &T) -> f64 {
        self(item)
    }
}

/// Computes the identity key of an element.
///
/// Two elements with equal identities are treated as the same element by
/// lookups and removals, whatever their priorities.
pub trait Identify<T> {
    type Id: Hash + Eq + Clone;

    fn identity(&self, item: &T) -> Self::Id;
}

impl<T, K, F> Identify<T> for F
where
    F: Fn(&T) -> K,
    K: Hash + Eq + Clone,
{
    type Id = K;

    #[inline]
    fn identity(&self, item: &T) -> K {
        self(item)
    }
}

/// Values that can stand in as their own priority.
///
/// Numbers convert directly. Strings are parsed after trimming whitespace, and
/// anything that does not parse becomes `NaN`.
///
/// # Precision
///
/// Priorities are `f64`. Integers with a magnitude above 2^53 (64- and
/// 128-bit integer types, large numeric strings) are rounded to the nearest
/// representable value, so distinct large integers such as nanosecond
/// timestamps can collapse to the same priority and then tie. Supply a
/// [`Prioritize`] implementation that rescales them when exact order matters.
pub trait AsPriority {
    fn as_priority(&self) -> f64;
}

macro_rules! impl_as_priority {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsPriority for $ty {
                #[inline]
                fn as_priority(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_as_priority!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl AsPriority for str {
    fn as_priority(&self) -> f64 {
        self.trim().parse::<f64>().unwrap_or(f64::NAN)
    }
}

impl AsPriority for String {
    fn as_priority(&self) -> f64 {
        self.as_str().as_priority()
    }
}

impl<A: AsPriority + ?Sized> AsPriority for &A {
    #[inline]
    fn as_priority(&self) -> f64 {
        (**self).as_priority()
    }
}

/// Default priority strategy: the element is its own priority.
///
/// Conversion goes through [`AsPriority`] and shares its precision limits:
/// integers beyond 2^53 are rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericPriority;

impl<T: AsPriority> Prioritize<T> for NumericPriority {
    #[inline]
    fn priority(&self, item: &T) -> f64 {
        item.as_priority()
    }
}

/// Default identity strategy: the element is its own identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelfIdentity;

impl<T> Identify<T> for SelfIdentity
where
    T: Hash + Eq + Clone,
{
    type Id = T;

    #[inline]
    fn identity(&self, item: &T) -> T {
        item.clone()
    }
}

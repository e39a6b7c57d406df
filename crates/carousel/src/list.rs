// SPDX-License-Identifier: Apache-2.0
//! The carousel container: storage, pivot, and origin composed behind one type.
//!
//! [`Carousel`] maps every logical index through the pivot into the physical
//! storage, so rotation is a pure offset change. The origin field records the
//! physical slot the pivot held at the last stabilization point (construction),
//! which is what [`reset_order`](Carousel::reset_order) restores.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Range;

use crate::cyclic;
use crate::error::CarouselError;
use crate::pivot::Pivot;
use crate::store::Store;

/// Whether a carousel's element circle may change after construction.
///
/// The tag is fixed for the container's lifetime. Immutability freezes the
/// element circle only: rotation and [`Carousel::reset_order`] stay legal on
/// an [`Immutable`](Mutability::Immutable) carousel, while `set`, `insert`,
/// `remove_at`, and `push` fail with [`CarouselError::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// Structural mutation is permitted.
    Mutable,
    /// The element circle is frozen; only the pivot may move.
    Immutable,
}

/// A rotation-aware ordered container.
///
/// Logical index 0 addresses the **pivot** element; [`rotate`](Self::rotate)
/// and [`rotate_backward`](Self::rotate_backward) move the pivot in O(1)
/// without touching any element. See the crate docs for the element-circle
/// model and the positional-vs-circular equality distinction.
///
/// # Invariants
///
/// - The pivot offset is 0 when the container is empty, otherwise in
///   `[0, len)`.
/// - `get(i)` is the element at physical slot `(p + i) mod len`.
/// - Structural mutation keeps the logical pivot element unchanged, except
///   for `insert(0, _)` (the new element becomes the pivot, as in any
///   sequence) and `remove_at(0)` (the successor becomes the pivot).
///
/// # Iteration and Mutation
///
/// [`iter`](Self::iter) borrows the container, so the borrow checker rejects
/// structural mutation while an iterator is live — a compile-time version of
/// the fail-fast policy conventional containers enforce at runtime.
#[derive(Clone)]
pub struct Carousel<T> {
    store: Store<T>,
    pivot: Pivot,
    origin: usize,
    mutability: Mutability,
}

impl<T> Carousel<T> {
    /// Create an empty mutable carousel.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            pivot: Pivot::new(),
            origin: 0,
            mutability: Mutability::Mutable,
        }
    }

    /// Create a mutable carousel from `items` in creation order, pivot at the
    /// first element.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            store: Store::from_vec(items),
            pivot: Pivot::new(),
            origin: 0,
            mutability: Mutability::Mutable,
        }
    }

    /// Create an immutable carousel from `items` in creation order.
    ///
    /// The element circle is frozen for the container's lifetime; rotation and
    /// [`reset_order`](Self::reset_order) remain available.
    pub fn immutable(items: Vec<T>) -> Self {
        Self {
            store: Store::from_vec(items),
            pivot: Pivot::new(),
            origin: 0,
            mutability: Mutability::Immutable,
        }
    }

    /// Number of elements in the container.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The container's mutability tag.
    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// Returns `true` if structural mutation is permitted.
    pub fn is_mutable(&self) -> bool {
        self.mutability == Mutability::Mutable
    }

    /// Element at logical index `i`.
    ///
    /// # Errors
    ///
    /// [`CarouselError::IndexOutOfRange`] when `i >= len`.
    pub fn get(&self, i: usize) -> Result<&T, CarouselError> {
        let q = self.pivot.physical(i, self.store.len())?;
        self.store.get(q)
    }

    /// The pivot element, or `None` when empty.
    pub fn front(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Mutable reference to the element at logical index `i`.
    ///
    /// In-place element mutation changes the element circle, so this counts
    /// as structural mutation for the mutability tag.
    ///
    /// # Errors
    ///
    /// [`CarouselError::Unsupported`] on an immutable container,
    /// [`CarouselError::IndexOutOfRange`] when `i >= len`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut T, CarouselError> {
        self.ensure_mutable()?;
        let q = self.pivot.physical(i, self.store.len())?;
        self.store.get_mut(q)
    }

    /// Replace the element at logical index `i`, returning the previous one.
    ///
    /// # Errors
    ///
    /// [`CarouselError::Unsupported`] on an immutable container,
    /// [`CarouselError::IndexOutOfRange`] when `i >= len`. The container is
    /// unchanged on error.
    pub fn set(&mut self, i: usize, value: T) -> Result<T, CarouselError> {
        self.ensure_mutable()?;
        let q = self.pivot.physical(i, self.store.len())?;
        self.store.set(q, value)
    }

    /// Append `value` at the logical end (just behind the pivot on the circle).
    ///
    /// # Errors
    ///
    /// [`CarouselError::Unsupported`] on an immutable container.
    pub fn push(&mut self, value: T) -> Result<(), CarouselError> {
        self.insert(self.len(), value)
    }

    /// Insert `value` at logical index `i` in `[0, len]`, shifting later
    /// elements one logical position back.
    ///
    /// `insert(0, v)` makes `v` the new pivot; any other index leaves the
    /// pivot element unchanged.
    ///
    /// # Errors
    ///
    /// [`CarouselError::Unsupported`] on an immutable container,
    /// [`CarouselError::IndexOutOfRange`] when `i > len`. The container is
    /// unchanged on error.
    pub fn insert(&mut self, i: usize, value: T) -> Result<(), CarouselError> {
        self.ensure_mutable()?;
        let n = self.store.len();
        let q = self.pivot.insert_slot(i, n)?;
        if n > 0 && q <= self.origin {
            self.origin += 1;
        }
        self.store.insert(q, value)
    }

    /// Remove and return the element at logical index `i`.
    ///
    /// `remove_at(0)` removes the pivot; its successor becomes the new pivot.
    ///
    /// # Errors
    ///
    /// [`CarouselError::Unsupported`] on an immutable container,
    /// [`CarouselError::IndexOutOfRange`] when `i >= len`. The container is
    /// unchanged on error.
    pub fn remove_at(&mut self, i: usize) -> Result<T, CarouselError> {
        self.ensure_mutable()?;
        let q = self.pivot.physical(i, self.store.len())?;
        let value = self.store.remove(q)?;
        let new_n = self.store.len();
        self.pivot.note_removal(q, new_n);
        if q < self.origin {
            self.origin -= 1;
        }
        if self.origin >= new_n {
            self.origin = 0;
        }
        Ok(value)
    }

    /// Advance the pivot one step forward: `[1, 2, 3]` becomes `[2, 3, 1]`.
    ///
    /// O(1); silent no-op when `len <= 1`.
    pub fn rotate(&mut self) {
        self.pivot.rotate(self.store.len());
    }

    /// Retreat the pivot one step backward: `[1, 2, 3]` becomes `[3, 1, 2]`.
    ///
    /// O(1); silent no-op when `len <= 1`.
    pub fn rotate_backward(&mut self) {
        self.pivot.rotate_backward(self.store.len());
    }

    /// Return the current pivot element, then rotate forward.
    ///
    /// The returned element is the one `get(0)` addressed *before* the call;
    /// afterwards `get(0)` addresses its successor. On a single-element
    /// container the sole element is returned and the order is unchanged.
    ///
    /// # Errors
    ///
    /// [`CarouselError::Empty`] when the container is empty.
    pub fn get_and_rotate(&mut self) -> Result<&T, CarouselError> {
        let n = self.store.len();
        if n == 0 {
            return Err(CarouselError::Empty);
        }
        let q = self.pivot.physical(0, n)?;
        self.pivot.rotate(n);
        self.store.get(q)
    }

    /// Rotate forward, then return the new pivot element.
    ///
    /// The returned element is the one `get(0)` addresses *after* the call.
    /// On a single-element container the sole element is returned and the
    /// order is unchanged.
    ///
    /// # Errors
    ///
    /// [`CarouselError::Empty`] when the container is empty.
    pub fn rotate_and_get(&mut self) -> Result<&T, CarouselError> {
        let n = self.store.len();
        if n == 0 {
            return Err(CarouselError::Empty);
        }
        self.pivot.rotate(n);
        let q = self.pivot.physical(0, n)?;
        self.store.get(q)
    }

    /// Return the current pivot element, then rotate backward.
    ///
    /// # Errors
    ///
    /// [`CarouselError::Empty`] when the container is empty.
    pub fn get_and_rotate_backward(&mut self) -> Result<&T, CarouselError> {
        let n = self.store.len();
        if n == 0 {
            return Err(CarouselError::Empty);
        }
        let q = self.pivot.physical(0, n)?;
        self.pivot.rotate_backward(n);
        self.store.get(q)
    }

    /// Rotate backward, then return the new pivot element (the one that was
    /// at `get(len - 1)` before the call).
    ///
    /// # Errors
    ///
    /// [`CarouselError::Empty`] when the container is empty.
    pub fn rotate_backward_and_get(&mut self) -> Result<&T, CarouselError> {
        let n = self.store.len();
        if n == 0 {
            return Err(CarouselError::Empty);
        }
        self.pivot.rotate_backward(n);
        let q = self.pivot.physical(0, n)?;
        self.store.get(q)
    }

    /// Restore the pivot to its position at the last stabilization point
    /// (construction).
    ///
    /// On an immutable container this always restores the exact creation-time
    /// logical order, regardless of prior rotations. On a mutable container
    /// the restored position is best-effort once `insert`/`remove_at` have
    /// occurred: the pivot lands on a well-defined but implementation-chosen
    /// element that need not be the historical one. Repeated calls with no
    /// intervening rotation or mutation are idempotent.
    pub fn reset_order(&mut self) {
        self.pivot.reset(self.origin, self.store.len());
    }

    /// Iterate the elements in current logical order, starting at the pivot.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            items: self.store.as_slice(),
            offset: self.pivot.offset(),
            logical: 0..self.store.len(),
        }
    }

    /// Consume the container, yielding the elements in current logical order.
    pub fn into_vec(self) -> Vec<T> {
        let offset = self.pivot.offset();
        let mut items = self.store.into_vec();
        items.rotate_left(offset);
        items
    }

    fn ensure_mutable(&self) -> Result<(), CarouselError> {
        match self.mutability {
            Mutability::Mutable => Ok(()),
            Mutability::Immutable => Err(CarouselError::Unsupported),
        }
    }
}

impl<T: PartialEq> Carousel<T> {
    /// Returns `true` iff `other`'s element circle equals this one's — that
    /// is, iff some rotation of `other` is positionally equal to `self`.
    ///
    /// This is an equivalence relation over containers of a fixed circle:
    /// reflexive, symmetric, and transitive. Containers of different lengths
    /// are never circularly equal.
    ///
    /// # Cost
    ///
    /// Worst case **O(len)** time and O(len) scratch (KMP rotation search) —
    /// linear, but far heavier than `==`, which is a plain element-wise scan.
    /// Budget accordingly when calling this in a hot path.
    pub fn circularly_eq(&self, other: &Self) -> bool {
        // Circular equality ignores the pivots, so compare physical buffers.
        cyclic::is_rotation(self.store.as_slice(), other.store.as_slice())
    }
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Carousel<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for Carousel<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// Positional equality: same length and same current logical order.
///
/// Never searches rotations — `[1, 2, 3] != [3, 1, 2]` here even though the
/// two are circularly equal. The mutability tag does not participate.
impl<T: PartialEq> PartialEq for Carousel<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Carousel<T> {}

/// Consistent with positional equality: two carousels with identical current
/// logical order hash identically.
impl<T: Hash> Hash for Carousel<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

/// Renders the current logical order, e.g. `[2, 3, 1]` after one rotation of
/// `[1, 2, 3]`.
impl<T: fmt::Display> fmt::Display for Carousel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Carousel<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Carousel<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

/// Borrowing iterator over a carousel's current logical order.
///
/// Because this borrows the container, structural mutation while it is live is
/// a compile error rather than a runtime fail-fast.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    items: &'a [T],
    offset: usize,
    logical: Range<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.logical.next()?;
        self.items.get((self.offset + i) % self.items.len())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.logical.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let i = self.logical.next_back()?;
        self.items.get((self.offset + i) % self.items.len())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.logical.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Carousel<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a carousel's current logical order.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Carousel<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

// SPDX-License-Identifier: Apache-2.0
//! Physical-order element storage.
//!
//! [`Store`] owns the elements in **rotation-independent physical order** and
//! exposes physical-index operations only. Callers translate logical indices
//! through the pivot (`physical = (p + logical) mod n`) before reaching this
//! module; rotation therefore never touches the storage at all.

use core::mem;

use crate::error::CarouselError;

/// Growable physical-order storage.
///
/// A thin fallible wrapper over `Vec<T>`. Every operation is all-or-nothing:
/// on `Err` the store is unchanged.
#[derive(Debug, Clone)]
pub(crate) struct Store<T> {
    items: Vec<T>,
}

impl<T> Store<T> {
    /// Create an empty store.
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Take ownership of `items` as the physical order.
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of elements stored.
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no elements are stored.
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// View the elements in physical order.
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the store, yielding the physical-order vector.
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Element at physical index `q`.
    pub(crate) fn get(&self, q: usize) -> Result<&T, CarouselError> {
        self.items.get(q).ok_or(CarouselError::IndexOutOfRange {
            index: q,
            len: self.items.len(),
        })
    }

    /// Mutable reference to the element at physical index `q`.
    pub(crate) fn get_mut(&mut self, q: usize) -> Result<&mut T, CarouselError> {
        let len = self.items.len();
        self.items
            .get_mut(q)
            .ok_or(CarouselError::IndexOutOfRange { index: q, len })
    }

    /// Replace the element at physical index `q`, returning the previous one.
    pub(crate) fn set(&mut self, q: usize, value: T) -> Result<T, CarouselError> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(q)
            .ok_or(CarouselError::IndexOutOfRange { index: q, len })?;
        Ok(mem::replace(slot, value))
    }

    /// Insert `value` at physical index `q`, shifting later elements right.
    ///
    /// Accepts `q` in `[0, len]`; `q == len` appends.
    pub(crate) fn insert(&mut self, q: usize, value: T) -> Result<(), CarouselError> {
        if q > self.items.len() {
            return Err(CarouselError::IndexOutOfRange {
                index: q,
                len: self.items.len(),
            });
        }
        self.items.insert(q, value);
        Ok(())
    }

    /// Remove and return the element at physical index `q`.
    pub(crate) fn remove(&mut self, q: usize) -> Result<T, CarouselError> {
        if q >= self.items.len() {
            return Err(CarouselError::IndexOutOfRange {
                index: q,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(q))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ── 1. empty store invariants ───────────────────────────────────────

    #[test]
    fn empty_store_invariants() {
        let store: Store<i32> = Store::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert!(store.as_slice().is_empty());
    }

    // ── 2. get in and out of range ──────────────────────────────────────

    #[test]
    fn get_bounds() {
        let store = Store::from_vec(vec![10, 20, 30]);
        assert_eq!(*store.get(0).unwrap(), 10);
        assert_eq!(*store.get(2).unwrap(), 30);
        assert_eq!(
            store.get(3),
            Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    // ── 3. set returns the previous element ─────────────────────────────

    #[test]
    fn set_returns_previous() {
        let mut store = Store::from_vec(vec![1, 2, 3]);
        let old = store.set(1, 9).unwrap();
        assert_eq!(old, 2);
        assert_eq!(store.as_slice(), &[1, 9, 3]);
    }

    // ── 4. set out of range leaves store unchanged ──────────────────────

    #[test]
    fn set_out_of_range_is_noop() {
        let mut store = Store::from_vec(vec![1, 2]);
        assert!(store.set(2, 9).is_err());
        assert_eq!(store.as_slice(), &[1, 2]);
    }

    // ── 5. insert accepts the append index ──────────────────────────────

    #[test]
    fn insert_at_end_appends() {
        let mut store = Store::from_vec(vec![1, 2]);
        store.insert(2, 3).unwrap();
        assert_eq!(store.as_slice(), &[1, 2, 3]);
        assert!(store.insert(4, 9).is_err());
        assert_eq!(store.as_slice(), &[1, 2, 3]);
    }

    // ── 6. remove shifts later elements left ────────────────────────────

    #[test]
    fn remove_shifts_left() {
        let mut store = Store::from_vec(vec![1, 2, 3]);
        assert_eq!(store.remove(0).unwrap(), 1);
        assert_eq!(store.as_slice(), &[2, 3]);
        assert_eq!(
            store.remove(2),
            Err(CarouselError::IndexOutOfRange { index: 2, len: 2 })
        );
    }
}

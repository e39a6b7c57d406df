// SPDX-License-Identifier: Apache-2.0
//! Pivot bookkeeping and index translation.
//!
//! [`Pivot`] owns the single integer offset `p` that maps logical index 0 onto
//! a physical slot of the backing store. All modular arithmetic between the
//! logical and physical index spaces happens here and nowhere else; rotation
//! mutates only `p` and never moves an element.
//!
//! Invariant: `p == 0` when the container is empty, otherwise `p` is in
//! `[0, n)` where `n` is the container length. Every method that changes the
//! length ([`insert_slot`](Pivot::insert_slot), [`note_removal`](Pivot::note_removal))
//! re-establishes the invariant before returning.

use crate::error::CarouselError;

/// Offset of the pivot element within the physical storage.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Pivot {
    offset: usize,
}

impl Pivot {
    /// Pivot at physical position 0 (creation state).
    pub(crate) fn new() -> Self {
        Self { offset: 0 }
    }

    /// Current physical position of the pivot.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Translate logical index `i` to a physical index, for a container of
    /// length `n`. Fails when `i >= n`.
    ///
    /// The bounds check lives here on purpose: `(p + i) mod n` would silently
    /// wrap an out-of-range logical index back into a valid physical slot.
    pub(crate) fn physical(&self, i: usize, n: usize) -> Result<usize, CarouselError> {
        if i >= n {
            return Err(CarouselError::IndexOutOfRange { index: i, len: n });
        }
        Ok((self.offset + i) % n)
    }

    /// Advance the pivot one step forward. No-op when `n <= 1`.
    pub(crate) fn rotate(&mut self, n: usize) {
        if n > 1 {
            self.offset = (self.offset + 1) % n;
        }
    }

    /// Retreat the pivot one step backward. No-op when `n <= 1`.
    pub(crate) fn rotate_backward(&mut self, n: usize) {
        if n > 1 {
            self.offset = (self.offset + n - 1) % n;
        }
    }

    /// Map a logical insert index `i` in `[0, n]` to the physical slot it
    /// occupies, adjusting the pivot so the logical pivot element is unchanged.
    ///
    /// Logical `i == 0` and `i == n` both map to physical slot `p`; they are
    /// told apart by whether the translation wrapped. Unwrapped `i == 0`
    /// deliberately makes the new element the pivot. A wrapped slot lands at
    /// or before `p`, so the pivot advances by one to keep addressing the same
    /// element — rotation state reflects how many elements were structurally
    /// skipped, independent of edits elsewhere.
    pub(crate) fn insert_slot(&mut self, i: usize, n: usize) -> Result<usize, CarouselError> {
        if i > n {
            return Err(CarouselError::IndexOutOfRange { index: i, len: n });
        }
        let q = self.offset + i;
        if n > 0 && q >= n {
            self.offset += 1;
            Ok(q - n)
        } else {
            Ok(q)
        }
    }

    /// Record the removal of physical slot `q`; `new_n` is the length after
    /// the removal.
    ///
    /// A removal below `p` retreats the pivot by one. Removing the pivot slot
    /// itself leaves `p` addressing the successor element, wrapping back to 0
    /// when the pivot falls off the end of the shrunk storage.
    pub(crate) fn note_removal(&mut self, q: usize, new_n: usize) {
        if q < self.offset {
            self.offset -= 1;
        }
        if self.offset >= new_n {
            self.offset = 0;
        }
    }

    /// Restore the pivot to `origin`, clamping to 0 when out of range for a
    /// container of length `n`.
    pub(crate) fn reset(&mut self, origin: usize, n: usize) {
        self.offset = if origin < n { origin } else { 0 };
    }
}

// SPDX-License-Identifier: Apache-2.0
//! Error type for carousel operations.
//!
//! Every variant is a programmer-error signal surfaced synchronously to the
//! caller. Nothing is retried internally, and a failed operation never leaves
//! partial mutation behind.

use thiserror::Error;

/// Errors that can occur during carousel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A compound get-and-rotate operation was called on an empty container.
    #[error("[CAROUSEL_EMPTY] cannot take the pivot of an empty carousel")]
    Empty,

    /// An index was outside the valid range for the operation.
    ///
    /// For `get`/`set`/`remove_at` the valid range is `[0, len)`; for `insert`
    /// it is `[0, len]`. The reported `index` is the logical index the caller
    /// passed.
    #[error("[CAROUSEL_INDEX] index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending logical index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },

    /// Structural mutation was attempted on an immutable container.
    ///
    /// Rotation and `reset_order` remain legal on immutable containers; only
    /// the element circle is frozen.
    #[error("[CAROUSEL_IMMUTABLE] structural mutation on an immutable carousel")]
    Unsupported,
}

// SPDX-License-Identifier: Apache-2.0
//! Rotation-aware ordered container.
//!
//! A [`Carousel`] behaves like an ordinary indexable sequence, but additionally
//! exposes a distinguished **pivot** element — the element at logical index 0 —
//! that can be advanced or retreated along the sequence in O(1). Rotation never
//! moves elements; only the notion of "where position 0 is" changes.
//!
//! ```
//! use carousel::Carousel;
//!
//! let mut ring: Carousel<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(ring.to_string(), "[1, 2, 3]");
//! ring.rotate();
//! assert_eq!(ring.to_string(), "[2, 3, 1]");
//! ring.rotate();
//! assert_eq!(ring.to_string(), "[3, 1, 2]");
//! ring.rotate_backward();
//! assert_eq!(ring.to_string(), "[2, 3, 1]");
//! ```
//!
//! # Element Circles and Circular Equality
//!
//! The **element circle** of a container is its elements lined up in a circle:
//! the cyclic order, ignoring where the pivot currently sits. Two containers
//! are *circularly equal* ([`Carousel::circularly_eq`]) when their element
//! circles are equal — `[1, 2, 3]` and `[3, 1, 2]` are equal circles, while
//! `[1, 2, 3]` and `[1, 3, 2]` are not. Positional equality (`==`) compares
//! current logical order only and never searches rotations; it is the relation
//! std collections and hashing integrate with.
//!
//! # Immutability
//!
//! An immutable container that could not rotate would be pointless — it would
//! just be a slice. Immutability here ([`Mutability::Immutable`]) means the
//! element circle is frozen: rotation and [`reset_order`](Carousel::reset_order)
//! stay legal, while `set`/`insert`/`remove_at`/`push` fail with
//! [`CarouselError::Unsupported`].
//!
//! # Cost Model
//!
//! Rotation is O(1). Indexed access is O(1). Structural mutation matches an
//! equivalent dynamic array (O(n) worst case for interior insert/remove).
//! [`Carousel::circularly_eq`] is O(n) time and O(n) scratch — linear, but
//! still the most expensive operation here; see its docs.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod cyclic;
mod error;
mod list;
mod pivot;
mod store;

pub use error::CarouselError;
pub use list::{Carousel, IntoIter, Iter, Mutability};

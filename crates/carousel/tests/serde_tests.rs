// SPDX-License-Identifier: Apache-2.0

#![cfg(feature = "serde")]
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use carousel::Carousel;

#[test]
fn serializes_current_logical_order() {
    let mut ring = Carousel::from_vec(vec![1, 2, 3]);
    ring.rotate();
    let json = serde_json::to_string(&ring).unwrap();
    assert_eq!(json, "[2,3,1]");
}

#[test]
fn deserializes_as_mutable_with_pivot_at_zero() {
    let ring: Carousel<i32> = serde_json::from_str("[2,3,1]").unwrap();
    assert!(ring.is_mutable());
    assert_eq!(ring.to_string(), "[2, 3, 1]");
    assert_eq!(ring.front(), Some(&2));
}

#[test]
fn round_trip_preserves_positional_equality() {
    let mut ring = Carousel::from_vec(vec![5, 6, 7, 8]);
    ring.rotate();
    ring.rotate();
    let json = serde_json::to_string(&ring).unwrap();
    let back: Carousel<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(ring, back);
}

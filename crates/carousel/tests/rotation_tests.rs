// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use carousel::{Carousel, CarouselError};

fn logical(ring: &Carousel<i32>) -> Vec<i32> {
    ring.iter().copied().collect()
}

#[test]
fn rotate_scenario_from_docs() {
    let mut ring = Carousel::from_vec(vec![1, 2, 3]);
    assert_eq!(ring.to_string(), "[1, 2, 3]");
    ring.rotate();
    assert_eq!(ring.to_string(), "[2, 3, 1]");
    ring.rotate();
    assert_eq!(ring.to_string(), "[3, 1, 2]");
    ring.rotate_backward();
    assert_eq!(ring.to_string(), "[2, 3, 1]");
}

#[test]
fn rotate_then_backward_restores_order() {
    let mut ring = Carousel::from_vec(vec![10, 20, 30, 40]);
    let before = logical(&ring);
    ring.rotate();
    ring.rotate_backward();
    assert_eq!(logical(&ring), before);
    ring.rotate_backward();
    ring.rotate();
    assert_eq!(logical(&ring), before);
}

#[test]
fn full_revolution_restores_order() {
    let mut ring = Carousel::from_vec(vec![1, 2, 3, 4, 5]);
    let before = logical(&ring);
    for _ in 0..5 {
        ring.rotate();
    }
    assert_eq!(logical(&ring), before);
    for _ in 0..5 {
        ring.rotate_backward();
    }
    assert_eq!(logical(&ring), before);
}

#[test]
fn get_and_rotate_samples_before_stepping() {
    let mut ring = Carousel::from_vec(vec![1, 2, 3]);
    let old_second = *ring.get(1).unwrap();
    let returned = *ring.get_and_rotate().unwrap();
    assert_eq!(returned, 1); // pre-call pivot
    assert_eq!(*ring.get(0).unwrap(), old_second); // successor took over
    assert_eq!(logical(&ring), vec![2, 3, 1]);
}

#[test]
fn rotate_and_get_samples_after_stepping() {
    let mut ring = Carousel::from_vec(vec![1, 2, 3]);
    let returned = *ring.rotate_and_get().unwrap();
    assert_eq!(returned, 2); // post-call pivot
    assert_eq!(logical(&ring), vec![2, 3, 1]);
}

#[test]
fn backward_compound_variants() {
    let mut ring = Carousel::from_vec(vec![1, 2, 3]);
    let returned = *ring.get_and_rotate_backward().unwrap();
    assert_eq!(returned, 1); // pre-call pivot
    assert_eq!(logical(&ring), vec![3, 1, 2]); // old last element is pivot now

    let mut ring = Carousel::from_vec(vec![1, 2, 3]);
    let returned = *ring.rotate_backward_and_get().unwrap();
    assert_eq!(returned, 3); // post-call pivot: the old last element
    assert_eq!(logical(&ring), vec![3, 1, 2]);
}

#[test]
fn empty_container_behavior() {
    let mut ring: Carousel<i32> = Carousel::new();
    // Plain rotation is a silent no-op.
    ring.rotate();
    ring.rotate_backward();
    assert!(ring.is_empty());
    // Every compound variant surfaces Empty.
    assert_eq!(ring.get_and_rotate(), Err(CarouselError::Empty));
    assert_eq!(ring.rotate_and_get(), Err(CarouselError::Empty));
    assert_eq!(ring.get_and_rotate_backward(), Err(CarouselError::Empty));
    assert_eq!(ring.rotate_backward_and_get(), Err(CarouselError::Empty));
}

#[test]
fn singleton_is_rotation_fixed_point() {
    let mut ring = Carousel::from_vec(vec![5]);
    ring.rotate();
    ring.rotate_backward();
    assert_eq!(logical(&ring), vec![5]);
    assert_eq!(*ring.get_and_rotate().unwrap(), 5);
    assert_eq!(*ring.rotate_and_get().unwrap(), 5);
    assert_eq!(*ring.get_and_rotate_backward().unwrap(), 5);
    assert_eq!(*ring.rotate_backward_and_get().unwrap(), 5);
    assert_eq!(logical(&ring), vec![5]);
}

#[test]
fn reset_order_restores_creation_order_on_immutable() {
    let mut ring = Carousel::immutable(vec![1, 2, 3, 4]);
    ring.rotate();
    ring.rotate();
    ring.rotate_backward();
    assert_ne!(logical(&ring), vec![1, 2, 3, 4]);
    ring.reset_order();
    assert_eq!(logical(&ring), vec![1, 2, 3, 4]);
    // Idempotent under repeated calls.
    ring.reset_order();
    assert_eq!(logical(&ring), vec![1, 2, 3, 4]);
}

#[test]
fn reset_order_is_idempotent_on_mutable() {
    let mut ring = Carousel::from_vec(vec![1, 2, 3]);
    ring.rotate();
    ring.reset_order();
    let after_first = logical(&ring);
    assert_eq!(after_first, vec![1, 2, 3]);
    ring.reset_order();
    assert_eq!(logical(&ring), after_first);
}

#[test]
fn front_tracks_the_pivot() {
    let mut ring = Carousel::from_vec(vec![7, 8, 9]);
    assert_eq!(ring.front(), Some(&7));
    ring.rotate();
    assert_eq!(ring.front(), Some(&8));
}

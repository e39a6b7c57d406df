// SPDX-License-Identifier: Apache-2.0
//! Rotation detection between physical buffers.
//!
//! Circular equality is rotation-invariant, so the pivots of the two
//! containers cancel out: `a` and `b` have equal element circles iff their
//! *physical* buffers are rotations of one another. That lets the facade hand
//! this module two plain slices and skip logical-order materialization.
//!
//! The matcher is Knuth-Morris-Pratt with `a` as the pattern scanned over `b`
//! conceptually doubled (`b ++ b`, indexed mod `n` — never allocated). Worst
//! case O(n) element comparisons and O(n) scratch for the prefix function,
//! requiring only `T: PartialEq`. The naive try-every-rotation comparison
//! would be O(n²); the linear algorithm costs one small allocation instead.

/// Returns `true` iff `b` is some rotation of `a`.
///
/// Length mismatch is an O(1) early exit; two empty slices are rotations of
/// each other.
pub(crate) fn is_rotation<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    let n = a.len();
    if n != b.len() {
        return false;
    }
    if n == 0 {
        return true;
    }
    let fail = prefix_function(a);
    let mut matched = 0;
    // A rotation match must start within the first n positions of b ++ b, so
    // scanning 2n - 1 characters is enough to find every candidate.
    for i in 0..2 * n - 1 {
        let c = &b[i % n];
        while matched > 0 && a[matched] != *c {
            matched = fail[matched - 1];
        }
        if a[matched] == *c {
            matched += 1;
        }
        if matched == n {
            return true;
        }
    }
    false
}

/// KMP prefix function: `fail[i]` is the length of the longest proper prefix
/// of `p[..=i]` that is also a suffix of it.
fn prefix_function<T: PartialEq>(p: &[T]) -> Vec<usize> {
    let mut fail = vec![0usize; p.len()];
    let mut k = 0;
    for (i, c) in p.iter().enumerate().skip(1) {
        while k > 0 && *c != p[k] {
            k = fail[k - 1];
        }
        if *c == p[k] {
            k += 1;
        }
        fail[i] = k;
    }
    fail
}

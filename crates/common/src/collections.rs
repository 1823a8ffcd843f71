//! Set-like operations over sequences.
//!
//! Every function borrows its inputs and returns a freshly allocated `Vec`;
//! inputs are never mutated and outputs never alias them.

use std::collections::HashSet;
use std::hash::Hash;

use crate::ports::RandomPort;

/// Removes duplicates, keeping the first occurrence of each value.
///
/// # Examples
///
/// ```
/// use utilbelt_common::dedup;
///
/// assert_eq!(dedup(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// assert_eq!(dedup::<i32>(&[]), Vec::<i32>::new());
/// ```
pub fn dedup<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// [`dedup`] for types that only implement `PartialEq` (floats, for example).
///
/// Quadratic in the length of the input.
pub fn dedup_by_eq<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Elements of `a` that also occur in `b`.
///
/// Keeps the order of `a` and any duplicates it contains. Uses a linear scan
/// of `b` per element; see [`intersect_hashed`] for large inputs.
///
/// ```
/// use utilbelt_common::intersect;
///
/// assert_eq!(intersect(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
/// ```
pub fn intersect<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| b.contains(item)).cloned().collect()
}

/// Elements of `a` that do not occur in `b`, in `a`'s order.
///
/// ```
/// use utilbelt_common::difference;
///
/// assert_eq!(difference(&[1, 2, 3], &[2]), vec![1, 3]);
/// ```
pub fn difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| !b.contains(item)).cloned().collect()
}

/// Set-backed [`intersect`]: O(|a| + |b|).
pub fn intersect_hashed<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let lookup: HashSet<&T> = b.iter().collect();
    a.iter()
        .filter(|item| lookup.contains(item))
        .cloned()
        .collect()
}

/// Set-backed [`difference`]: O(|a| + |b|).
pub fn difference_hashed<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let lookup: HashSet<&T> = b.iter().collect();
    a.iter()
        .filter(|item| !lookup.contains(item))
        .cloned()
        .collect()
}

/// Returns a uniformly shuffled copy of `items` (Fisher-Yates).
///
/// ```
/// use utilbelt_common::{shuffle, FixedRandomPort};
///
/// // Always picking index 0 rotates the sequence deterministically.
/// let rng = FixedRandomPort::constant(0);
/// assert_eq!(shuffle(&[1, 2, 3], &rng), vec![2, 3, 1]);
/// ```
pub fn shuffle<T: Clone>(items: &[T], rng: &dyn RandomPort) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_index(i + 1);
        out.swap(i, j);
    }
    out
}

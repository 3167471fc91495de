//! Eager counterparts of the [`seq`](crate::seq) functions.
//!
//! Everything here works on a materialized slice and returns a new [`Vec`] (or a single value)
//! rather than a lazy sequence. Apart from that, each function behaves exactly like its lazy
//! namesake.

use std::collections::HashMap;
use std::hash::Hash;

use crate::num::Number;
use crate::util::panic::{EmptyInputPanic, Panic};

mod tests;

/// Returns a new Vec containing only the items of `items` for which `should_keep` returns true.
pub fn filter_slice<T, P>(items: &[T], mut should_keep: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if should_keep(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Returns a new Vec of `to(item)` for every item of `items`.
pub fn map_slice<T, E, F>(items: &[T], to: F) -> Vec<E>
where
    F: FnMut(&T) -> E,
{
    items.iter().map(to).collect()
}

/// Returns the number of items in `items` equal to `target`.
pub fn count_slice<T: PartialEq>(items: &[T], target: &T) -> usize {
    let mut ct = 0;
    for item in items {
        if item == target {
            ct += 1;
        }
    }
    ct
}

/// Returns the number of items in `items` for which `should_count` returns true.
pub fn count_slice_func<T, P>(items: &[T], mut should_count: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut ct = 0;
    for item in items {
        if should_count(item) {
            ct += 1;
        }
    }
    ct
}

/// Returns a map from each distinct item of `items` to the number of times it occurs.
pub fn counter_slice<T: Hash + Eq + Clone>(items: &[T]) -> HashMap<T, usize> {
    let mut out = HashMap::with_capacity(items.len());
    for item in items {
        *out.entry(item.clone()).or_insert(0) += 1;
    }
    out
}

/// Returns true if `predicate` holds for at least one item of `items`.
pub fn any_slice<T, P: FnMut(&T) -> bool>(items: &[T], predicate: P) -> bool {
    items.iter().any(predicate)
}

/// Returns true if every item of `items` is equal to `target`.
pub fn all_slice<T: PartialEq>(items: &[T], target: &T) -> bool {
    for item in items {
        if item != target {
            return false;
        }
    }
    true
}

/// Returns true if `predicate` holds for every item of `items`.
pub fn all_slice_func<T, P: FnMut(&T) -> bool>(items: &[T], predicate: P) -> bool {
    items.iter().all(predicate)
}

/// Returns the sum of `items`, added from first to last starting from 0.
pub fn sum_slice<T: Number>(items: &[T]) -> T {
    let mut sum = T::zero();
    for &v in items {
        sum = sum + v;
    }
    sum
}

/// Returns the largest item of `items` along with its index.
///
/// Only a strictly greater item replaces the current maximum, so when the maximum occurs more
/// than once, the index of its first occurrence is returned.
///
/// # Panics
/// Panics if `items` is empty.
///
/// # Examples
/// ```
/// # use toolkit::slice::max_with_index;
/// assert_eq!(max_with_index(&[3, 7, 2, 7, 1]), (&7, 1));
/// ```
#[track_caller]
pub fn max_with_index<T: PartialOrd>(items: &[T]) -> (&T, usize) {
    let Some((first, rest)) = items.split_first() else {
        EmptyInputPanic("max_with_index").panic()
    };

    let (mut max_v, mut max_i) = (first, 0);
    for (i, v) in rest.iter().enumerate() {
        if v > max_v {
            max_v = v;
            max_i = i + 1;
        }
    }

    (max_v, max_i)
}

/// Returns a new Vec of length `len` with every slot set to `value`.
pub fn filled<T: Clone>(len: usize, value: T) -> Vec<T> {
    vec![value; len]
}

/// Sets every slot of `items` to `value`.
pub fn fill<T: Clone>(items: &mut [T], value: T) {
    items.fill(value);
}

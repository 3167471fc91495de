use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::num::Number;

/// Returns the number of items in `seq` equal to `target`.
///
/// # Examples
/// ```
/// # use toolkit::seq::count;
/// assert_eq!(count("banana".chars(), &'a'), 3);
/// assert_eq!(count(&[1, 2, 1], &1), 2);
/// ```
pub fn count<I, T>(seq: I, target: &T) -> usize
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq + ?Sized,
{
    let mut ct = 0;
    for item in seq {
        if item.borrow() == target {
            ct += 1;
        }
    }
    ct
}

/// Returns the number of items in `seq` for which `should_count` returns true.
pub fn count_func<I, P>(seq: I, mut should_count: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut ct = 0;
    for item in seq {
        if should_count(&item) {
            ct += 1;
        }
    }
    ct
}

/// Returns a map from each distinct item of `seq` to the number of times it occurred.
///
/// # Examples
/// ```
/// # use toolkit::seq::counter;
/// let counts = counter([7, 1, 7, 9, 1, 3]);
/// assert_eq!(counts[&7], 2);
/// assert_eq!(counts[&9], 1);
/// assert_eq!(counts.len(), 4);
/// ```
pub fn counter<I>(seq: I) -> HashMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let mut out = HashMap::with_capacity(8);
    for item in seq {
        *out.entry(item).or_insert(0) += 1;
    }
    out
}

/// Returns true if `predicate` holds for at least one item of `seq`. Stops at the first match.
pub fn any<I, P>(seq: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    for item in seq {
        if predicate(item) {
            return true;
        }
    }
    false
}

/// Returns true if `predicate` holds for every item of `seq`. Stops at the first mismatch, and
/// is vacuously true for an empty sequence.
pub fn all<I, P>(seq: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    for item in seq {
        if !predicate(item) {
            return false;
        }
    }
    true
}

/// Returns the sum of the items of `seq`, added in production order starting from 0.
///
/// Overflow behaves exactly as `+` does for `T`.
///
/// # Examples
/// ```
/// # use toolkit::seq::{range, sum};
/// assert_eq!(sum(range(1, 5)), 10);
/// assert_eq!(sum([0.5, 0.25]), 0.75);
/// ```
pub fn sum<I, T>(seq: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Number,
{
    let mut sum = T::zero();
    for v in seq {
        sum = sum + v;
    }
    sum
}

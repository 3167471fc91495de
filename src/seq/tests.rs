#![cfg(test)]

use std::cell::Cell;
use std::collections::HashMap;

use rstest::rstest;

use super::*;
use crate::slice::{filter_slice, map_slice};
use crate::util::panic::assert_panics;

#[test]
fn test_lazy_matches_eager() {
    let items = [1, 2, 3, 4, 5];

    let lazy: Vec<_> = map(filter(items, |i| i % 2 == 0), |i| i * 10).collect();
    let eager = map_slice(&filter_slice(&items, |i| i % 2 == 0), |i| i * 10);

    assert_eq!(lazy, [20, 40]);
    assert_eq!(lazy, eager, "Lazy and eager forms should produce the same items.");
}

#[test]
fn test_adapters_are_lazy() {
    let pulled = Cell::new(0);
    let source = map(range(0, 1_000), |i| {
        pulled.set(pulled.get() + 1);
        i
    });

    let first_even = filter(source, |i| i % 2 == 0).nth(2);
    assert_eq!(first_even, Some(4));
    assert_eq!(pulled.get(), 5, "Only the items needed for the answer should be produced.");
}

#[test]
fn test_walk_stops_on_false() {
    let produced = Cell::new(0);
    let seq = map(range(0, 100), |i| {
        produced.set(produced.get() + 1);
        i
    });

    let mut seen = Vec::new();
    let finished = walk(seq, |i| {
        seen.push(i);
        i < 3
    });

    assert!(!finished);
    assert_eq!(seen, [0, 1, 2, 3]);
    assert_eq!(produced.get(), 4, "No items should be produced after the consumer stops.");

    assert!(walk(range(0, 3), |_| true), "A consumer that never stops should see the end.");
}

#[test]
fn test_enumerate() {
    let pairs: Vec<_> = enumerate(filter("a1b2c".chars(), char::is_ascii_alphabetic)).collect();
    assert_eq!(
        pairs,
        [(0, 'a'), (1, 'b'), (2, 'c')],
        "Indices should follow production order, not source positions."
    );
}

#[test]
fn test_cycle() {
    let items = [1, 2, 3];
    let cycled: Vec<_> = cycle(&items).take(10).copied().collect();
    assert_eq!(cycled, [1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);

    let mut seq = cycle(&items);
    seq.next();
    let restarted: Vec<_> = seq.clone().take(3).collect();
    assert_eq!(restarted, [&2, &3, &1], "A cloned cycle should resume from the same place.");
    assert_eq!(seq.next(), Some(&2));
}

#[test]
fn test_cycle_empty() {
    let seq = cycle::<u8>(&[]);
    assert_panics!({
        seq.clone().next();
    }, "Pulling from an empty cycle should panic.");
}

#[rstest]
#[case(range(0, 5), &[0, 1, 2, 3, 4])]
#[case(range_step(3, 7, 2), &[3, 5])]
#[case(range_step(3, 8, 5), &[3])]
#[case(range(5, 5), &[])]
#[case(range(7, 2), &[])]
#[case(range_step(5, 0, -2), &[5, 3, 1])]
#[case(range_step(0, 5, -1), &[])]
#[case(crate::range!(3, 7, 2), &[3, 5])]
#[case(crate::range!(-2, 1), &[-2, -1, 0])]
fn test_range(#[case] seq: Range<i32>, #[case] expected: &[i32]) {
    assert_eq!(seq.collect::<Vec<_>>(), expected);
}

#[test]
fn test_range_stops_at_overflow() {
    let tail: Vec<_> = range(u8::MAX - 2, u8::MAX).collect();
    assert_eq!(tail, [253, 254]);

    let stepped: Vec<_> = range_step(250_u8, u8::MAX, 4).collect();
    assert_eq!(stepped, [250, 254], "The range should end instead of wrapping past u8::MAX.");
}

#[test]
fn test_range_is_restartable() {
    let seq = range(0, 4);
    assert_eq!(sum(seq.clone()), 6);
    assert_eq!(sum(seq), 6);
}

#[test]
fn test_range_misuse() {
    assert_panics!({
        crate::range!(1);
    }, "One bound should panic.");
    assert_panics!({
        crate::range!(1, 2, 3, 4);
    }, "Four bounds should panic.");
    assert_panics!({
        range_step(0, 10, 0);
    }, "A zero step should panic.");
}

#[test]
#[should_panic(expected = "range requires 2 or 3 bounds")]
fn test_range_arity_message() {
    Range::from_bounds(&[1_i64]);
}

#[test]
fn test_counting() {
    let words = ["a", "b", "a", "c", "b", "a"];

    assert_eq!(count(words, &"a"), 3);
    assert_eq!(count(words.iter(), &"z"), 0);
    assert_eq!(count_func(words, |w| *w != "a"), 3);

    let counts = counter(words);
    assert_eq!(counts, HashMap::from([("a", 3), ("b", 2), ("c", 1)]));
}

#[test]
fn test_any_and_all_short_circuit() {
    let checked = Cell::new(0);
    let found = any(range(0, 100), |i| {
        checked.set(checked.get() + 1);
        i == 2
    });
    assert!(found);
    assert_eq!(checked.get(), 3, "any should stop at the first match.");

    checked.set(0);
    let every = all(range(0, 100), |i| {
        checked.set(checked.get() + 1);
        i < 4
    });
    assert!(!every);
    assert_eq!(checked.get(), 5, "all should stop at the first mismatch.");

    assert!(!any(range(0, 0), |_| true));
    assert!(all(range(0, 0), |_| false), "all should be vacuously true for no items.");
}

#[test]
fn test_sum() {
    assert_eq!(sum(range(1, 101)), 5050);
    assert_eq!(sum(Vec::<u8>::new()), 0);
    assert_eq!(sum(map([1.5, 2.5], |f: f64| f * 2.0)), 8.0);
}

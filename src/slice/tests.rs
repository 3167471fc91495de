#![cfg(test)]

use std::collections::HashMap;

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_filter_and_map() {
    let items = [1, 2, 3, 4, 5];
    let evens = filter_slice(&items, |i| i % 2 == 0);
    assert_eq!(evens, [2, 4]);
    assert_eq!(map_slice(&evens, |i| i * 10), [20, 40]);

    let words = ["tree", "a", "forest"];
    assert_eq!(
        map_slice(&words, |w| w.len()),
        [4, 1, 6],
        "Mapping should be one for one and keep order."
    );
}

#[test]
fn test_counting() {
    let items = ["a", "b", "a", "c", "b", "a"];
    assert_eq!(count_slice(&items, &"b"), 2);
    assert_eq!(count_slice_func(&items, |s| *s > "a"), 3);
    assert_eq!(
        counter_slice(&items),
        HashMap::from([("a", 3), ("b", 2), ("c", 1)])
    );
}

#[test]
fn test_any_and_all() {
    assert!(any_slice(&[1, 3, 4], |i| i % 2 == 0));
    assert!(!any_slice::<u8, _>(&[], |_| true));

    assert!(all_slice(&['x', 'x'], &'x'));
    assert!(!all_slice(&['x', 'y'], &'x'));
    assert!(all_slice::<char>(&[], &'x'), "No items should vacuously match.");

    assert!(all_slice_func(&[2, 4, 6], |i| i % 2 == 0));
    assert!(!all_slice_func(&[2, 5, 6], |i| i % 2 == 0));
}

#[test]
fn test_sum_slice() {
    assert_eq!(sum_slice(&[1_u64, 2, 3]), 6);
    assert_eq!(sum_slice::<i8>(&[]), 0);
    assert_eq!(sum_slice(&[0.25_f32, 0.5]), 0.75);
}

#[test]
fn test_max_with_index() {
    assert_eq!(
        max_with_index(&[3, 7, 2, 7, 1]),
        (&7, 1),
        "The first occurrence of the maximum should win ties."
    );
    assert_eq!(max_with_index(&[9]), (&9, 0));
    assert_eq!(max_with_index(&[1.0, 0.5, 2.0]), (&2.0, 2));
    assert_eq!(max_with_index(&["b", "c", "a"]), (&"c", 1));

    assert_panics!({
        max_with_index::<u8>(&[]);
    }, "The max of no items should panic.");
}

#[test]
fn test_filled_and_fill() {
    let mut grid = filled(3, '.');
    assert_eq!(grid, ['.', '.', '.']);

    fill(&mut grid[1..], '#');
    assert_eq!(grid, ['.', '#', '#']);
}

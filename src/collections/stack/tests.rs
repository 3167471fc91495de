#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_pop_reverses_push_order() {
    let items = ["a", "b", "c", "d"];
    let mut stack = Stack::with_cap(items.len());
    stack.push_all(items);

    let mut popped = Vec::new();
    while !stack.is_empty() {
        popped.push(stack.pop());
    }

    assert_eq!(popped, ["d", "c", "b", "a"], "Items should pop in reverse push order.");
}

#[test]
fn test_push_all_keeps_argument_order() {
    let mut stack = Stack::new();
    stack.push(0);
    stack.push_all([1, 2, 3]);

    assert_eq!(*stack, [0, 1, 2, 3], "Stack should deref bottom to top.");
    assert_eq!(stack.peek(), Some(&3));
    assert_eq!(stack.len(), 4);
}

#[test]
fn test_pop_empty() {
    assert_panics!({
        Stack::<u8>::new().pop();
    });

    let mut stack = Stack::with_cap(4);
    stack.push('x');
    stack.pop();
    assert_eq!(stack.try_pop(), None);
    assert_panics!({
        stack.pop();
    }, "Popping a drained Stack should panic.");
}

#[test]
#[should_panic(expected = "pop called on empty stack")]
fn test_pop_empty_message() {
    Stack::<u8>::with_cap(8).pop();
}

#[test]
fn test_into_iter_drains_from_top() {
    let stack: Stack<_> = (1..=4).collect();
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), [4, 3, 2, 1]);
}

#[test]
fn test_capacity_is_only_a_hint() {
    let mut small = Stack::with_cap(0);
    let mut large = Stack::with_cap(256);
    small.extend(0..50);
    large.extend(0..50);

    assert_eq!(small, large, "Capacity should never change the contents of a Stack.");
}

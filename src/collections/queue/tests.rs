#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_pop_keeps_push_order() {
    let items = [10, 20, 30, 40];
    let mut queue = Queue::with_cap(items.len());
    queue.push_all(items);

    let mut popped = Vec::new();
    while !queue.is_empty() {
        popped.push(queue.pop());
    }

    assert_eq!(popped, items, "Items should pop in push order.");
}

#[test]
fn test_interleaved_push_and_pop() {
    let mut queue = Queue::with_cap(2);
    queue.push('a');
    queue.push('b');
    assert_eq!(queue.pop(), 'a');

    queue.push_all(['c', 'd']);
    assert_eq!(queue.peek(), Some(&'b'));
    assert_eq!(
        queue.iter().collect::<String>(),
        "bcd",
        "Front should always be the oldest item still held."
    );

    assert_eq!(queue.pop(), 'b');
    assert_eq!(queue.pop(), 'c');
    assert_eq!(queue.pop(), 'd');
}

#[test]
fn test_space_is_reused() {
    let mut queue = Queue::with_cap(4);
    for i in 0..10_000 {
        queue.push(i);
        assert_eq!(queue.pop(), i);
    }
    assert!(
        queue.cap() < 64,
        "A queue that never holds more than one item shouldn't keep growing."
    );
}

#[test]
fn test_pop_empty() {
    assert_panics!({
        Queue::<u8>::new().pop();
    });

    let mut queue = Queue::new();
    queue.push(1);
    queue.pop();
    assert_eq!(queue.try_pop(), None);
    assert_panics!({
        queue.pop();
    }, "Popping a drained Queue should panic.");
}

#[test]
#[should_panic(expected = "pop called on empty queue")]
fn test_pop_empty_message() {
    Queue::<String>::with_cap(8).pop();
}

#[test]
fn test_into_iter_drains_from_front() {
    let queue: Queue<_> = vec![1, 2, 3].into();
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
}

#[derive(Debug)]
struct Job(u8);

#[test]
fn test_debug_without_clone_items() {
    let mut queue = Queue::with_cap(2);
    queue.push_all([Job(1), Job(2)]);

    let debug = format!("{queue:?}");
    assert!(
        debug.starts_with("Queue { contents: [Job(1), Job(2)], len: 2"),
        "Debug output should list items front to back, got {debug}."
    );
}

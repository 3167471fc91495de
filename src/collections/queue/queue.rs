use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};

use super::Iter;
use crate::util::fmt::DebugEntries;
use crate::util::panic::{EmptyPopPanic, Panic};

/// A first-in-first-out collection.
///
/// Items are held in a ring buffer, so space freed at the front by [`pop`](Queue::pop) is reused by
/// later pushes instead of being leaked for the lifetime of the Queue.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
/// - `m`: The number of items being pushed.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_all` | `O(m)`*, `O(n+m)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* If the Queue doesn't have enough capacity for the new items, it grows in `O(n)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    pub(crate) buf: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue. Memory will be allocated when the first item is pushed.
    pub const fn new() -> Queue<T> {
        Queue {
            buf: VecDeque::new(),
        }
    }

    /// Creates a new Queue with room for at least `cap` items before reallocating. This only
    /// affects allocation, never the behavior of the Queue.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::Queue;
    /// let queue: Queue<u8> = Queue::with_cap(5);
    /// assert!(queue.cap() >= 5);
    /// assert!(queue.is_empty());
    /// ```
    pub fn with_cap(cap: usize) -> Queue<T> {
        Queue {
            buf: VecDeque::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.buf.capacity()
    }

    /// Puts `item` at the back of the Queue.
    pub fn push(&mut self, item: T) {
        self.buf.push_back(item);
    }

    /// Pushes every item of `items` onto the back of the Queue, in order.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::Queue;
    /// let mut queue = Queue::new();
    /// queue.push_all(["first", "second"]);
    /// assert_eq!(queue.pop(), "first");
    /// ```
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.buf.extend(items);
    }

    /// Removes the item at the front of the Queue, the oldest one still held, and returns it.
    ///
    /// # Panics
    /// Panics if the Queue is empty. Use [`try_pop`](Queue::try_pop) when emptiness is expected.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::queue;
    /// let mut queue = queue![1, 2];
    /// assert_eq!(queue.pop(), 1);
    /// assert_eq!(queue.pop(), 2);
    /// ```
    #[track_caller]
    pub fn pop(&mut self) -> T {
        match self.buf.pop_front() {
            Some(item) => item,
            None => EmptyPopPanic("queue").panic(),
        }
    }

    /// Removes and returns the item at the front of the Queue, or [`None`] if it is empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.buf.pop_front()
    }

    /// Returns a reference to the item at the front of the Queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.buf.front()
    }

    /// Returns an iterator over the items in the Queue, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        Queue {
            buf: value.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    /// Treats the first item of `value` as the front of the Queue.
    fn from(value: Vec<T>) -> Self {
        Queue { buf: value.into() }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;

use crate::util::fmt::DebugEntries;
use crate::util::panic::{EmptyPopPanic, Panic};

/// A last-in-first-out collection, backed by a single growable buffer whose tail is the top of the
/// Stack.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Stack.
/// - `m`: The number of items being pushed.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_all` | `O(m)`*, `O(n+m)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* If the Stack doesn't have enough capacity for the new items, it grows in `O(n)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) buf: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack. Memory will be allocated when the first item is pushed.
    pub const fn new() -> Stack<T> {
        Stack { buf: Vec::new() }
    }

    /// Creates a new Stack with room for at least `cap` items before reallocating. This only
    /// affects allocation, never the behavior of the Stack.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::Stack;
    /// let stack: Stack<u8> = Stack::with_cap(5);
    /// assert!(stack.cap() >= 5);
    /// assert!(stack.is_empty());
    /// ```
    pub fn with_cap(cap: usize) -> Stack<T> {
        Stack {
            buf: Vec::with_capacity(cap),
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

    /// Puts `item` on the top of the Stack.
    pub fn push(&mut self, item: T) {
        self.buf.push(item);
    }

    /// Pushes every item of `items` in order, leaving the last one on top.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::Stack;
    /// let mut stack = Stack::new();
    /// stack.push_all([1, 2, 3]);
    /// assert_eq!(stack.pop(), 3);
    /// ```
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.buf.extend(items);
    }

    /// Removes the item at the top of the Stack and returns it.
    ///
    /// # Panics
    /// Panics if the Stack is empty. Use [`try_pop`](Stack::try_pop) when emptiness is expected.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::stack;
    /// let mut stack = stack![1, 2];
    /// assert_eq!(stack.pop(), 2);
    /// assert_eq!(stack.pop(), 1);
    /// ```
    #[track_caller]
    pub fn pop(&mut self) -> T {
        match self.buf.pop() {
            Some(item) => item,
            None => EmptyPopPanic("stack").panic(),
        }
    }

    /// Removes and returns the item at the top of the Stack, or [`None`] if it is empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Returns a reference to the item at the top of the Stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.buf.last()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        Stack {
            buf: value.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// Treats the last item of `value` as the top of the Stack.
    fn from(value: Vec<T>) -> Self {
        Stack { buf: value }
    }
}

impl<T> Deref for Stack<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<T> AsRef<[T]> for Stack<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

use std::iter::FusedIterator;

use crate::util::panic::{EmptyInputPanic, Panic};

/// Returns an endless sequence over the items of `items`, starting again from the first after the
/// last.
///
/// The sequence never ends on its own, so the consumer has to stop pulling from it.
///
/// # Panics
/// Pulling an item from the sequence panics if `items` is empty. Creating it does not.
///
/// # Examples
/// ```
/// # use toolkit::seq::cycle;
/// let items: Vec<_> = cycle(&['x', 'y']).take(5).copied().collect();
/// assert_eq!(items, ['x', 'y', 'x', 'y', 'x']);
/// ```
pub const fn cycle<T>(items: &[T]) -> Cycle<'_, T> {
    Cycle { items, index: 0 }
}

/// An endless sequence over the items of a slice. Created by [`cycle`].
#[derive(Debug)]
pub struct Cycle<'a, T> {
    pub(crate) items: &'a [T],
    pub(crate) index: usize,
}

impl<'a, T> Iterator for Cycle<'a, T> {
    type Item = &'a T;

    #[track_caller]
    fn next(&mut self) -> Option<Self::Item> {
        if self.items.is_empty() {
            EmptyInputPanic("cycle").panic()
        }

        let item = &self.items[self.index];
        self.index = (self.index + 1) % self.items.len();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> FusedIterator for Cycle<'_, T> {}

// Derived Clone would require T: Clone, but only the reference is copied.
impl<T> Clone for Cycle<'_, T> {
    fn clone(&self) -> Self {
        Cycle {
            items: self.items,
            index: self.index,
        }
    }
}

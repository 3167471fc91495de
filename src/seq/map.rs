use std::iter::FusedIterator;

/// Returns a sequence of `to(item)` for every item in `seq`, one for one and in order.
///
/// # Examples
/// ```
/// # use toolkit::seq::map;
/// let lengths: Vec<_> = map(["a", "bcd", "ef"], str::len).collect();
/// assert_eq!(lengths, [1, 3, 2]);
/// ```
pub fn map<I, F, E>(seq: I, to: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> E,
{
    Map {
        inner: seq.into_iter(),
        to,
    }
}

/// A lazy sequence that transforms each item of another. Created by [`map`].
#[derive(Clone, Debug)]
pub struct Map<I, F> {
    pub(crate) inner: I,
    pub(crate) to: F,
}

impl<I: Iterator, F: FnMut(I::Item) -> E, E> Iterator for Map<I, F> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(&mut self.to)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator, F: FnMut(I::Item) -> E, E> ExactSizeIterator for Map<I, F> {}

impl<I: FusedIterator, F: FnMut(I::Item) -> E, E> FusedIterator for Map<I, F> {}

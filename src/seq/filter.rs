use std::iter::FusedIterator;

/// Returns a sequence of the items in `seq` for which `should_keep` returns true, in their
/// original order.
///
/// # Examples
/// ```
/// # use toolkit::seq::filter;
/// let evens: Vec<_> = filter(1..=6, |i| i % 2 == 0).collect();
/// assert_eq!(evens, [2, 4, 6]);
/// ```
pub fn filter<I, P>(seq: I, should_keep: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        inner: seq.into_iter(),
        should_keep,
    }
}

/// A lazy sequence that skips the items of another rejected by a predicate. Created by
/// [`filter`].
#[derive(Clone, Debug)]
pub struct Filter<I, P> {
    pub(crate) inner: I,
    pub(crate) should_keep: P,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Iterator for Filter<I, P> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let should_keep = &mut self.should_keep;
        self.inner.find(|item| should_keep(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<I: FusedIterator, P: FnMut(&I::Item) -> bool> FusedIterator for Filter<I, P> {}

use std::iter::FusedIterator;

/// Returns a sequence of `(index, item)` pairs, where index counts up from 0 in production order.
///
/// # Examples
/// ```
/// # use toolkit::seq::enumerate;
/// let pairs: Vec<_> = enumerate("ab".chars()).collect();
/// assert_eq!(pairs, [(0, 'a'), (1, 'b')]);
/// ```
pub fn enumerate<I: IntoIterator>(seq: I) -> Enumerate<I::IntoIter> {
    Enumerate {
        inner: seq.into_iter(),
        index: 0,
    }
}

/// A lazy sequence that pairs each item of another with its index. Created by [`enumerate`].
#[derive(Clone, Debug)]
pub struct Enumerate<I> {
    pub(crate) inner: I,
    pub(crate) index: usize,
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (usize, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Enumerate<I> {}

impl<I: FusedIterator> FusedIterator for Enumerate<I> {}

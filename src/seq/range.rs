use std::iter::FusedIterator;

use num_traits::PrimInt;

use crate::util::panic::{Panic, RangeArityPanic, ZeroStepPanic};

/// Returns a sequence over the interval `[low, high)`, counting up by 1.
///
/// # Examples
/// ```
/// # use toolkit::seq::range;
/// assert_eq!(range(0, 5).collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
/// assert_eq!(range(5, 0).count(), 0);
/// ```
pub fn range<T: PrimInt>(low: T, high: T) -> Range<T> {
    Range::new(low, high, T::one())
}

/// Returns a sequence starting at `low` and advancing by `step`, ending before `high` is reached
/// or passed. A negative `step` counts down towards `high` instead.
///
/// # Panics
/// Panics if `step` is 0.
///
/// # Examples
/// ```
/// # use toolkit::seq::range_step;
/// assert_eq!(range_step(3, 7, 2).collect::<Vec<_>>(), [3, 5]);
/// assert_eq!(range_step(3, -3, -2).collect::<Vec<_>>(), [3, 1, -1]);
/// ```
#[track_caller]
pub fn range_step<T: PrimInt>(low: T, high: T, step: T) -> Range<T> {
    Range::new(low, high, step)
}

/// Creates a [`Range`] from 2 or 3 bounds, `low, high[, step]`.
///
/// # Panics
/// Panics when invoked with fewer than 2 or more than 3 bounds, or with a step of 0.
///
/// # Examples
/// ```
/// # use toolkit::range;
/// assert_eq!(range!(0, 3).collect::<Vec<_>>(), [0, 1, 2]);
/// assert_eq!(range!(10, 0, -5).collect::<Vec<_>>(), [10, 5]);
/// ```
#[macro_export]
macro_rules! range {
    ($($bound:expr),* $(,)?) => {
        $crate::seq::Range::from_bounds(&[$($bound),*])
    };
}

/// A lazy sequence of integers with a fixed step. Created by [`range`], [`range_step`] or
/// [`range!`](crate::range!).
///
/// The sequence ends early, rather than wrapping, if the next value would overflow `T`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Range<T> {
    pub(crate) next: Option<T>,
    pub(crate) high: T,
    pub(crate) step: T,
}

impl<T: PrimInt> Range<T> {
    /// # Panics
    /// Panics if `step` is 0.
    #[track_caller]
    pub fn new(low: T, high: T, step: T) -> Range<T> {
        if step.is_zero() {
            ZeroStepPanic.panic()
        }

        Range {
            next: Some(low),
            high,
            step,
        }
    }

    /// Creates a Range from a list of bounds: `[low, high]` steps by 1 and `[low, high, step]`
    /// steps by `step`.
    ///
    /// # Panics
    /// Panics if `bounds` doesn't contain 2 or 3 items, or if the step is 0.
    #[track_caller]
    pub fn from_bounds(bounds: &[T]) -> Range<T> {
        match *bounds {
            [low, high] => Range::new(low, high, T::one()),
            [low, high, step] => Range::new(low, high, step),
            _ => RangeArityPanic(bounds.len()).panic(),
        }
    }
}

impl<T: PrimInt> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        let in_bounds = if self.step < T::zero() {
            current > self.high
        } else {
            current < self.high
        };
        if !in_bounds {
            self.next = None;
            return None;
        }

        self.next = current.checked_add(&self.step);
        Some(current)
    }
}

impl<T: PrimInt> FusedIterator for Range<T> {}

//! Lazy, pull-based sequences.
//!
//! A sequence here is any [`Iterator`] (or [`IntoIterator`]): items are produced one at a time, in
//! order, only when the consumer asks for the next one. A consumer that stops asking stops
//! production, which is what makes infinite sequences like [`cycle`] usable. [`walk`] exposes that
//! protocol directly as a callback that returns whether it wants more.
//!
//! The adapters in this module ([`Filter`], [`Map`], [`Enumerate`], [`Cycle`] and [`Range`]) wrap
//! another sequence without materializing it, so they compose freely. The consuming functions
//! ([`count`], [`counter`], [`any`], [`all`], [`sum`], ...) drive a sequence in a single pass.
//! Eager equivalents operating on slices live in [`slice`](crate::slice).
//!
//! Adapters over restartable sources are [`Clone`]; cloning one before consuming it allows the
//! same sequence to be walked again.

mod consume;
mod cycle;
mod enumerate;
mod filter;
mod map;
mod range;
mod tests;

pub use consume::*;
pub use cycle::*;
pub use enumerate::*;
pub use filter::*;
pub use map::*;
pub use range::*;

/// Drives `seq`, handing each item to `consumer` in production order. The first time `consumer`
/// returns false, no further items are produced.
///
/// Returns true if the whole sequence was consumed and false if `consumer` stopped it early.
///
/// # Examples
/// ```
/// # use toolkit::seq::{cycle, walk};
/// let mut seen = Vec::new();
/// let finished = walk(cycle(&[1, 2, 3]), |i| {
///     seen.push(*i);
///     seen.len() < 5
/// });
/// assert!(!finished);
/// assert_eq!(seen, [1, 2, 3, 1, 2]);
/// ```
pub fn walk<I, F>(seq: I, mut consumer: F) -> bool
where
    I: IntoIterator,
    F: FnMut(I::Item) -> bool,
{
    for item in seq {
        if !consumer(item) {
            return false;
        }
    }
    true
}

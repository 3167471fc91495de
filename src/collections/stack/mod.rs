//! A module containing [`Stack`] and its owned iterator, [`IntoIter`].
//!
//! Borrowed iteration goes through the Stack's [`Deref<Target = [T]>`](std::ops::Deref)
//! implementation and visits items from the bottom to the top.
//!
//! [`Stack`] is also re-exported under the parent module.

mod iter;
mod stack;
mod tests;

pub use iter::*;
pub use stack::*;

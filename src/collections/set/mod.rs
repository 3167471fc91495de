//! A module containing [`Set`] and associated types.
//!
//! [`Iter`] and [`IntoIter`] provide borrowed and owned iteration over a set's elements. The
//! results of set operations on two Sets are iterated with the matching types from
//! [`std::collections::hash_set`].
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`Set`] is also re-exported under the parent module.

mod iter;
mod set;

pub use iter::*;
pub use set::*;

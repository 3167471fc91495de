//! A module containing [`Queue`] and associated types.
//!
//! Currently, the only other included types are for iteration, providing owned and borrowed
//! iteration over a queue's items from the front to the back.
//!
//! [`Queue`] is also re-exported under the parent module.

mod iter;
mod queue;
mod tests;

pub use iter::*;
pub use queue::*;

//! Generic containers for day-to-day use: [`Set`] for membership, [`Stack`] for LIFO access and
//! [`Queue`] for FIFO access.
//!
//! Every container takes an optional capacity hint at construction. The hint only saves
//! reallocations, it never changes what the container does.
//!
//! Misuse of a container, such as popping from an empty [`Stack`] or [`Queue`], is treated as a
//! bug in the calling code and panics. The `try_` variants exist for callers that expect
//! emptiness.

pub mod queue;
pub mod set;
pub mod stack;

#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use set::Set;
#[doc(inline)]
pub use stack::Stack;

/// Creates a [`Set`](crate::collections::Set) containing the provided items, sized to hold all of
/// them.
///
/// # Examples
/// ```
/// # use toolkit::set;
/// let set = set!["x", "y", "x"];
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::collections::Set::new()
    };
    ($($item:expr),+ $(,)?) => {{
        let items = [$($item),+];
        let mut set = $crate::collections::Set::with_cap(items.len());
        set.add_all(items);
        set
    }};
}

/// Creates a [`Stack`](crate::collections::Stack) with the provided items pushed in order, so the
/// last one is on top.
///
/// # Examples
/// ```
/// # use toolkit::stack;
/// let mut stack = stack![1, 2, 3];
/// assert_eq!(stack.pop(), 3);
/// ```
#[macro_export]
macro_rules! stack {
    () => {
        $crate::collections::Stack::new()
    };
    ($($item:expr),+ $(,)?) => {{
        let items = [$($item),+];
        let mut stack = $crate::collections::Stack::with_cap(items.len());
        stack.push_all(items);
        stack
    }};
}

/// Creates a [`Queue`](crate::collections::Queue) with the provided items pushed in order, so the
/// first one is at the front.
///
/// # Examples
/// ```
/// # use toolkit::queue;
/// let mut queue = queue![1, 2, 3];
/// assert_eq!(queue.pop(), 1);
/// ```
#[macro_export]
macro_rules! queue {
    () => {
        $crate::collections::Queue::new()
    };
    ($($item:expr),+ $(,)?) => {{
        let items = [$($item),+];
        let mut queue = $crate::collections::Queue::with_cap(items.len());
        queue.push_all(items);
        queue
    }};
}

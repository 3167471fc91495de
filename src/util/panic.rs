//! Fatal usage violations.
//!
//! Misuse of a container or helper (popping an empty [`Stack`](crate::collections::Stack),
//! folding an empty list of numbers, ...) is a bug in the calling code rather than a condition
//! to recover from. Each violation gets its own payload type, so the message lives in one place
//! and the call sites read as `EmptyPopPanic("stack").panic()`.

use std::error::Error;

use derive_more::{Display, Error};

pub trait Panic: Error {
    /// Aborts the current operation with the message of `self`.
    ///
    /// # Panics
    /// Always.
    #[track_caller]
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[cfg(feature = "collections")]
#[derive(Debug, Display, Error)]
#[display("pop called on empty {_0}")]
pub struct EmptyPopPanic(#[error(not(source))] pub &'static str);
#[cfg(feature = "collections")]
impl Panic for EmptyPopPanic {}

#[derive(Debug, Display, Error)]
#[display("0 items provided to {_0}")]
pub struct EmptyInputPanic(#[error(not(source))] pub &'static str);
impl Panic for EmptyInputPanic {}

#[cfg(feature = "seq")]
#[derive(Debug, Display, Error)]
#[display("range requires 2 or 3 bounds (low, high[, step]) but got {_0}")]
pub struct RangeArityPanic(#[error(not(source))] pub usize);
#[cfg(feature = "seq")]
impl Panic for RangeArityPanic {}

#[cfg(feature = "seq")]
#[derive(Debug, Display, Error)]
#[display("range step must be non-zero")]
pub struct ZeroStepPanic;
#[cfg(feature = "seq")]
impl Panic for ZeroStepPanic {}

#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

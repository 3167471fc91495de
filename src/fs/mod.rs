//! Whole-file line reading.
//!
//! [`read_lines`] and [`read_lines_bytes`] open a file, read all of it and release the file
//! descriptor before returning, whether or not the read succeeded. Failures come back as a
//! [`ReadLinesError`], whose variant tells the caller which phase failed: opening the file or
//! reading from it.
//!
//! The module talks to the OS through `libc`'s thin syscall wrappers, so each failure cause maps
//! to its own error type rather than an opaque error code.
#![cfg(unix)]

mod error;
mod fd;
mod lines;
mod tests;

pub use error::*;
pub use lines::*;

pub(crate) use fd::Fd;

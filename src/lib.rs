//! A toolkit of small generic utilities for day-to-day scripting, and especially for writing
//! puzzle-solving code.
//!
//! # Contents
//! - [`collections`]: [`Set`](collections::Set), [`Stack`](collections::Stack) and
//!   [`Queue`](collections::Queue), each with a capacity hint at construction.
//! - [`seq`]: lazy sequence helpers in the spirit of Python's builtins and `itertools`, such as
//!   [`cycle`](seq::cycle), [`range`](seq::range) and [`counter`](seq::counter).
//! - [`slice`]: the eager, slice-based twins of the [`seq`] helpers.
//! - [`num`]: GCD/LCM, absolute value and the [`Number`](num::Number) bound.
//! - [`text`], [`fs`] and [`time`]: whitespace splitting, line reading and scope timing.
//!
//! # Error Handling
//! Puzzle code rarely wants to handle an error at every call, so this crate splits failures into
//! two tiers.
//!
//! Misuse of the API, like popping from an empty [`Stack`](collections::Stack), folding an empty
//! list of numbers with [`gcd_all`](num::gcd_all) or building a [`range!`] from the wrong number of
//! bounds, is a bug in the calling code. These panic, and every function that can is documented
//! with a `# Panics` section.
//!
//! Failures that depend on the environment rather than the caller, which means I/O, are returned as
//! [`Result`]s. Errors are strongly typed, using enums for static dispatch with one struct (usually
//! a ZST) per cause, all of which implement [`Error`](std::error::Error).
//!
//! # Logging
//! The [`fs`] and [`time`] modules log through the [`log`] facade. Nothing is printed unless the
//! binary installs a logger, except for [`TimeIt`](time::TimeIt) reports which also go to stdout.
//!
//! # Features
//! - `collections` (default): the container types.
//! - `seq` (default): the lazy sequence helpers.
//! - `fs` (default): line reading on Unix, via `libc`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "fs")]
pub mod fs;
pub mod num;
#[cfg(feature = "seq")]
pub mod seq;
pub mod slice;
pub mod text;
pub mod time;

pub(crate) mod util;

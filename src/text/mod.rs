//! Small string helpers for parsing puzzle input.

use std::error::Error;
use std::str::{Bytes, FromStr};

use crate::util::result::ResultExtension;

mod tests;

const SEPARATORS: [char; 3] = [' ', '\t', '\n'];

/// Returns the tokens of `s` separated by spaces, tabs and newlines, from left to right.
///
/// Runs of separators, and separators at either end, never produce empty tokens. Other whitespace,
/// such as `'\r'`, is kept as part of a token.
///
/// # Examples
/// ```
/// # use toolkit::text::split_whitespace;
/// let tokens: Vec<_> = split_whitespace("  a\tb\n c ").collect();
/// assert_eq!(tokens, ["a", "b", "c"]);
/// ```
pub fn split_whitespace(s: &str) -> impl Iterator<Item = &str> {
    s.split(SEPARATORS).filter(|token| !token.is_empty())
}

/// Returns a sequence over the bytes of `s`.
pub fn str_bytes(s: &str) -> Bytes<'_> {
    s.bytes()
}

/// Parses `s` into a `T`.
///
/// # Panics
/// Panics with the message of the parse error if `s` isn't a valid `T`.
///
/// # Examples
/// ```
/// # use toolkit::text::parse_or_panic;
/// let n: i32 = parse_or_panic("-42");
/// assert_eq!(n, -42);
/// ```
#[track_caller]
pub fn parse_or_panic<T>(s: &str) -> T
where
    T: FromStr,
    T::Err: Error,
{
    s.parse().throw()
}

#![cfg(test)]

use rstest::rstest;

use super::*;
use crate::util::panic::assert_panics;

#[rstest]
#[case("  a\tb\n c ", &["a", "b", "c"])]
#[case("", &[])]
#[case(" \t\n ", &[])]
#[case("one", &["one"])]
#[case("x\r\ny", &["x\r", "y"])]
#[case("a\u{a0}b c", &["a\u{a0}b", "c"])]
fn test_split_whitespace(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(split_whitespace(input).collect::<Vec<_>>(), expected);
}

#[test]
fn test_str_bytes() {
    assert_eq!(str_bytes("hé").collect::<Vec<_>>(), [b'h', 0xc3, 0xa9]);
}

#[test]
fn test_parse_or_panic() {
    assert_eq!(parse_or_panic::<u16>("8080"), 8080);
    assert_eq!(parse_or_panic::<f64>("0.5"), 0.5);

    assert_panics!({
        parse_or_panic::<i32>("twelve");
    }, "An invalid number should panic.");
}

#[test]
#[should_panic(expected = "invalid digit found in string")]
fn test_parse_or_panic_message() {
    parse_or_panic::<u8>("1x");
}

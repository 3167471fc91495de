#![cfg(test)]

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

fn file_with(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(content).expect("temp file should be writable");
    file.flush().expect("temp file should flush");
    file
}

#[test]
fn test_read_lines_skips_empty() {
    let file = file_with(b"first\n\nsecond\n  \nthird");
    let lines = read_lines(file.path()).expect("lines should be read");

    assert_eq!(
        lines,
        ["first", "second", "  ", "third"],
        "Only empty lines should be skipped, and the last line needs no terminator."
    );
}

#[test]
fn test_read_lines_crlf() {
    let file = file_with(b"a\r\n\r\nb\r\n");
    assert_eq!(
        read_lines(file.path()).expect("lines should be read"),
        ["a", "b"],
        "Windows line endings should be stripped before checking for empty lines."
    );
}

#[test]
fn test_read_lines_empty_file() {
    let file = file_with(b"");
    assert!(read_lines(file.path()).expect("lines should be read").is_empty());
    assert!(read_lines_bytes(file.path()).expect("lines should be read").is_empty());
}

#[test]
fn test_read_lines_large_file() {
    let content = (0..5_000).map(|i| format!("line {i}\n")).collect::<String>();
    let file = file_with(content.as_bytes());

    let lines = read_lines(file.path()).expect("lines should be read");
    assert_eq!(lines.len(), 5_000, "Files larger than a single read should be read fully.");
    assert_eq!(lines[4_999], "line 4999");
}

#[test]
fn test_read_lines_invalid_utf8() {
    let file = file_with(b"fine\n\xff\xfe\n");
    let err = read_lines(file.path()).expect_err("invalid UTF-8 should fail");

    assert!(err.is_read(), "Decoding happens after a successful open.");
    assert_eq!(err.to_string(), "failed to read lines: line 2 is not valid UTF-8");
}

#[test]
fn test_read_lines_bytes() {
    let file = file_with(b"ab\r\n\n\nc\nd");
    let lines = read_lines_bytes(file.path()).expect("lines should be read");

    assert_eq!(
        lines,
        [b"ab\r".to_vec(), b"c".to_vec(), b"d".to_vec()],
        "Raw lines should keep '\\r' and drop only the '\\n' terminator."
    );

    let file = file_with(b"\xff\n");
    assert_eq!(
        read_lines_bytes(file.path()).expect("non UTF-8 bytes should be fine"),
        [vec![0xff_u8]]
    );
}

#[test]
fn test_missing_file_is_open_error() {
    let err = read_lines("/this/path/does/not/exist.txt").expect_err("missing file should fail");

    match err {
        ReadLinesError::Open(OpenError::MissingComponent(_)) => {},
        other => panic!("expected a missing component open error, got {other:?}"),
    }
    assert!(read_lines_bytes("/this/path/does/not/exist.txt").is_err_and(|e| e.is_open()));
}

#[test]
fn test_invalid_path_is_open_error() {
    let err = read_lines("bad\0path").expect_err("nul byte should fail");
    assert!(matches!(err, ReadLinesError::Open(OpenError::InvalidPath(_))));
}

#[test]
fn test_directory_is_read_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let err = read_lines(dir.path()).expect_err("directories can't be read as lines");

    assert!(
        matches!(err, ReadLinesError::Read(ReadError::IsDirectory(_))),
        "Opening a directory read-only succeeds, so the failure belongs to the read phase."
    );
}

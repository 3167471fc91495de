use std::path::Path;
use std::str;

use log::debug;

use super::{Fd, InvalidUtf8Error, ReadError, ReadLinesError};

const LINES_CAP: usize = 128;

/// Reads the file at `file_path` and returns all of its non-empty lines, in file order.
///
/// Lines are separated by `'\n'`, and a `'\r'` directly before the separator is removed, so both
/// Unix and Windows line endings are supported. Lines left empty are skipped.
///
/// # Errors
/// Returns [`ReadLinesError::Open`] if the file can't be opened, and [`ReadLinesError::Read`] if
/// reading fails or a line isn't valid UTF-8.
///
/// # Examples
/// ```no_run
/// # use toolkit::fs::read_lines;
/// for line in read_lines("input.txt")? {
///     println!("{line}");
/// }
/// # Ok::<(), toolkit::fs::ReadLinesError>(())
/// ```
pub fn read_lines<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>, ReadLinesError> {
    let file_path = file_path.as_ref();
    let content = read_all(file_path)?;

    let mut lines = Vec::with_capacity(LINES_CAP);
    for (index, line) in content.split(|&b| b == b'\n').enumerate() {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        match str::from_utf8(line) {
            Ok(line) => lines.push(line.to_owned()),
            Err(_) => Err(ReadError::from(InvalidUtf8Error { line: index + 1 }))?,
        }
    }

    debug!("read {} lines from {}", lines.len(), file_path.display());
    Ok(lines)
}

/// Reads the file at `file_path` and returns the raw bytes of all of its non-empty lines, in file
/// order.
///
/// Lines are separated by `'\n'`, which isn't included in the returned bytes. Unlike
/// [`read_lines`], any other bytes, including a `'\r'` before the separator, are kept as is.
///
/// # Errors
/// Returns [`ReadLinesError::Open`] if the file can't be opened, and [`ReadLinesError::Read`] if
/// reading fails.
pub fn read_lines_bytes<P: AsRef<Path>>(file_path: P) -> Result<Vec<Vec<u8>>, ReadLinesError> {
    let file_path = file_path.as_ref();
    let content = read_all(file_path)?;

    let mut lines = Vec::with_capacity(LINES_CAP);
    for line in content.split(|&b| b == b'\n') {
        if !line.is_empty() {
            lines.push(line.to_vec());
        }
    }

    debug!("read {} byte lines from {}", lines.len(), file_path.display());
    Ok(lines)
}

fn read_all(file_path: &Path) -> Result<Vec<u8>, ReadLinesError> {
    let fd = Fd::open(file_path)?;
    debug!("opened {} as {fd:?}", file_path.display());

    // fd is closed on return, including when the read fails.
    Ok(fd.read_to_end()?)
}

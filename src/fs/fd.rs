use std::ffi::CString;
use std::fmt::{self, Debug, Formatter};
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::c_int;
use log::{trace, warn};

use super::{InvalidPathError, OpenError, ReadError};

const CHUNK_SIZE: usize = 8 * 1024;

pub(crate) fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or_default()
}

/// An owned, read-only file descriptor. The descriptor is closed when this is dropped.
pub(crate) struct Fd(pub c_int);

impl Fd {
    pub fn open(file_path: &Path) -> Result<Fd, OpenError> {
        let pathname = CString::new(file_path.as_os_str().as_bytes())
            .map_err(|_| InvalidPathError)?;

        // SAFETY: pathname is a valid, nul-terminated string that outlives the call.
        match unsafe { libc::open(pathname.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC) } {
            -1 => Err(OpenError::from_err_no(err_no())),
            fd => Ok(Fd(fd)),
        }
    }

    /// Reads from the current position to the end of the file. Reads interrupted by a signal are
    /// retried.
    pub fn read_to_end(&self) -> Result<Vec<u8>, ReadError> {
        let mut buf = Vec::with_capacity(CHUNK_SIZE);
        let mut chunk = [0_u8; CHUNK_SIZE];

        loop {
            // SAFETY: chunk is valid for writes of up to chunk.len() bytes.
            match unsafe { libc::read(self.0, chunk.as_mut_ptr().cast(), chunk.len()) } {
                -1 => match err_no() {
                    libc::EINTR => continue,
                    e => return Err(ReadError::from_err_no(e)),
                },
                0 => return Ok(buf),
                count => {
                    trace!("read {count} bytes from fd {}", self.0);
                    buf.extend_from_slice(&chunk[..count as usize]);
                },
            }
        }
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // isn't used again.
        if unsafe { libc::close(self.0) } == -1 {
            // Nothing was written, so a failed close loses no data.
            warn!("error while closing fd {}: OS error code {}", self.0, err_no());
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}

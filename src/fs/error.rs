use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

#[derive(Debug, Display, Clone, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, Error)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Clone, Error)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Clone, Error)]
#[display("permission denied")]
pub struct PermissionError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Clone, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains a nul byte")]
pub struct InvalidPathError;

#[derive(Debug, Display, Clone, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Clone, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Clone, Error)]
#[display("file is too large to be opened")]
pub struct OversizedFileError;

#[derive(Debug, Display, Clone, Error)]
#[display("path refers to a directory")]
pub struct IsDirectoryError;

#[derive(Debug, Display, Clone, Error)]
#[display("operation would block")]
pub struct WouldBlockError;

#[derive(Debug, Display, Clone, Error)]
#[display("line {line} is not valid UTF-8")]
pub struct InvalidUtf8Error {
    pub line: usize,
}

#[derive(Debug, Display, Clone, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub c_int);

/// The reasons a file can fail to open.
#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum OpenError {
    Interrupt(InterruptError),
    OOM(OOMError),
    FileCount(FileCountError),
    Permission(PermissionError),
    ExcessiveLinks(ExcessiveLinksError),
    PathLength(PathLengthError),
    InvalidPath(InvalidPathError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    OversizedFile(OversizedFileError),
    Unexpected(UnexpectedError),
}

impl OpenError {
    pub(crate) fn from_err_no(err_no: c_int) -> OpenError {
        match err_no {
            libc::EINTR =>                   InterruptError.into(),
            libc::ENOMEM =>                  OOMError.into(),
            libc::EMFILE | libc::ENFILE =>   FileCountError.into(),
            libc::EACCES | libc::EPERM =>    PermissionError.into(),
            libc::ELOOP =>                   ExcessiveLinksError.into(),
            libc::ENAMETOOLONG =>            PathLengthError.into(),
            libc::ENOENT =>                  MissingComponentError.into(),
            libc::ENOTDIR =>                 NonDirComponentError.into(),
            libc::EOVERFLOW | libc::EFBIG => OversizedFileError.into(),
            e =>                             UnexpectedError(e).into(),
        }
    }
}

/// The reasons reading from an open file can fail.
#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum ReadError {
    Interrupt(InterruptError),
    IO(IOError),
    IsDirectory(IsDirectoryError),
    WouldBlock(WouldBlockError),
    InvalidUtf8(InvalidUtf8Error),
    Unexpected(UnexpectedError),
}

impl ReadError {
    pub(crate) fn from_err_no(err_no: c_int) -> ReadError {
        match err_no {
            libc::EINTR =>  InterruptError.into(),
            libc::EIO =>    IOError.into(),
            libc::EISDIR => IsDirectoryError.into(),
            libc::EAGAIN => WouldBlockError.into(),
            e =>            UnexpectedError(e).into(),
        }
    }
}

/// The error returned by [`read_lines`](super::read_lines) and
/// [`read_lines_bytes`](super::read_lines_bytes), identifying which phase of the read failed.
#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum ReadLinesError {
    #[display("failed to open file: {_0}")]
    Open(OpenError),
    #[display("failed to read lines: {_0}")]
    Read(ReadError),
}

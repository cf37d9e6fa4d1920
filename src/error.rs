//! Common error type for shell and configuration operations

use core::fmt;

/// A common error type for shell and configuration operations.
///
/// This enum defines the error conditions surfaced by the command registry,
/// the dispatcher, command handlers and the configuration layer. It is
/// designed to be simple and portable for `no_std` environments; the
/// `Display` implementation provides the one-line diagnostic printed by the
/// console before control returns to the prompt.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A bad, missing or out-of-range command argument was provided.
    InvalidArgument,
    /// A command name or file was not found.
    NotFound,
    /// The command registry is at capacity.
    Full,
    /// A command with the same name is already registered.
    Duplicate,
    /// Malformed JSON, or the token ceiling was exceeded.
    ParseError,
    /// A fixed-capacity buffer or record could not hold the data.
    OutOfMemory,
    /// The console input line exceeded its buffer.
    BufferOverflow,
    /// A file or output write operation failed.
    IoError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => write!(f, "Invalid argument"),
            Error::NotFound => write!(f, "Not found"),
            Error::Full => write!(f, "Registry full"),
            Error::Duplicate => write!(f, "Duplicate command"),
            Error::ParseError => write!(f, "Parse error"),
            Error::OutOfMemory => write!(f, "Out of memory"),
            Error::BufferOverflow => write!(f, "Buffer overflow"),
            Error::IoError => write!(f, "I/O error"),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::IoError
    }
}

impl From<crate::storage::Error> for Error {
    fn from(err: crate::storage::Error) -> Self {
        match err {
            crate::storage::Error::NotFound => Error::NotFound,
            crate::storage::Error::NoSpace => Error::OutOfMemory,
            _ => Error::IoError,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::InvalidArgument => defmt::write!(f, "InvalidArgument"),
            Error::NotFound => defmt::write!(f, "NotFound"),
            Error::Full => defmt::write!(f, "Full"),
            Error::Duplicate => defmt::write!(f, "Duplicate"),
            Error::ParseError => defmt::write!(f, "ParseError"),
            Error::OutOfMemory => defmt::write!(f, "OutOfMemory"),
            Error::BufferOverflow => defmt::write!(f, "BufferOverflow"),
            Error::IoError => defmt::write!(f, "IoError"),
        }
    }
}

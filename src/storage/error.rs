//! Common error types for file store operations

/// A common error type for file store operations.
///
/// This enum defines a set of common errors that can occur when working with
/// path-oriented storage backends. It is designed to be simple and portable
/// for `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The requested path does not exist.
    NotFound,
    /// An error occurred during a read operation.
    ReadError,
    /// An error occurred during a write operation.
    WriteError,
    /// The backend has no room for the file or entry.
    NoSpace,
    /// The path exceeds the backend's path capacity.
    PathTooLong,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotFound => defmt::write!(f, "NotFound"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::NoSpace => defmt::write!(f, "NoSpace"),
            Error::PathTooLong => defmt::write!(f, "PathTooLong"),
        }
    }
}

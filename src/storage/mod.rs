//! # Path-oriented storage abstraction
//!
//! This module provides the file store seam between the configuration
//! assembler, the storage commands and whatever filesystem the target
//! actually mounts (LittleFS, FAT, a RAM disk, a host directory). The
//! abstraction is deliberately flat: paths name whole files, files are read
//! and written in one call, and listings are delivered through a visitor
//! callback so no directory structures need to be allocated.
//!
//! # Design Philosophy
//!
//! - **Technology Agnostic**: the trait works with any mounted filesystem
//! - **Embedded-First**: designed for `no_std` environments with bounded
//!   buffers and no directory tree allocation
//! - **Whole-file Operations**: configuration files are small and bounded,
//!   so streaming interfaces are unnecessary
//!
//! # Usage Examples
//!
//! ```rust
//! use coreshell::storage::{FileStore, RamFileStore};
//!
//! let mut store: RamFileStore = RamFileStore::new();
//! store.store("boot.json", b"{\"device_name\":\"Probe1\"}").unwrap();
//!
//! let mut buf = [0u8; 64];
//! let len = store.load("boot.json", &mut buf).unwrap();
//! assert_eq!(&buf[..len], b"{\"device_name\":\"Probe1\"}");
//! ```

/// Common error types for file store operations
pub mod error;

/// Fixed-slot in-memory backend
pub mod ram;

/// Host-directory backend (requires the `std` feature)
#[cfg(feature = "std")]
pub mod host;

pub use error::Error;
pub use ram::RamFileStore;

#[cfg(feature = "std")]
pub use host::DirStore;

/// Total and used byte counts reported by a file store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageUsage {
    /// Total capacity of the backend in bytes.
    pub total: usize,
    /// Bytes currently occupied by stored files.
    pub used: usize,
}

/// Trait for path-oriented file storage backends.
///
/// Implementations map textual paths to whole-file contents. All operations
/// are blocking and synchronous. Methods take `&mut self` because many
/// embedded filesystem drivers require exclusive access even for reads.
pub trait FileStore {
    /// Get the size in bytes of the file at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(len)` - File exists and holds `len` bytes
    /// * `Err(Error::NotFound)` - No file at that path
    fn size(&mut self, path: &str) -> Result<usize, Error>;

    /// Read the file at `path` into `buf`.
    ///
    /// Copies at most `buf.len()` bytes. Callers that need the whole file
    /// should check [`size`](Self::size) first and provide a large enough
    /// buffer.
    ///
    /// # Returns
    ///
    /// * `Ok(len)` - Number of bytes copied into `buf`
    /// * `Err(error)` - File missing or the read failed
    fn load(&mut self, path: &str, buf: &mut [u8]) -> Result<usize, Error>;

    /// Create or replace the file at `path` with `data`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - File written
    /// * `Err(error)` - No room, path too long, or the write failed
    fn store(&mut self, path: &str, data: &[u8]) -> Result<(), Error>;

    /// Delete the file at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - File removed
    /// * `Err(Error::NotFound)` - No file at that path
    fn remove(&mut self, path: &str) -> Result<(), Error>;

    /// Report total and used capacity.
    fn usage(&mut self) -> Result<StorageUsage, Error>;

    /// Visit every stored file as `(path, size)` in backend order.
    fn for_each_entry(&mut self, visit: &mut dyn FnMut(&str, usize)) -> Result<(), Error>;
}

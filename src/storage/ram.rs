//! Fixed-slot in-memory file store.
//!
//! `RamFileStore` keeps a small number of whole files in statically sized
//! slots. It serves as the RAM-disk backend on targets without a mounted
//! filesystem and as the storage fixture in tests.

use heapless::{String, Vec};

use super::error::Error;
use super::{FileStore, StorageUsage};

/// Maximum path length accepted by [`RamFileStore`].
pub const MAX_PATH: usize = 64;

struct RamFile<const FILE_SIZE: usize> {
    path: String<MAX_PATH>,
    data: Vec<u8, FILE_SIZE>,
}

/// In-memory file store with `FILES` slots of `FILE_SIZE` bytes each.
///
/// The defaults hold four files of up to 8 KiB, matching the configuration
/// file ceiling. All storage lives inside the struct, so instances can be
/// placed in a `static` on embedded targets.
///
/// # Examples
///
/// ```rust
/// use coreshell::storage::{FileStore, RamFileStore};
///
/// let mut store: RamFileStore = RamFileStore::new();
/// store.store("notes.txt", b"hello").unwrap();
/// assert_eq!(store.size("notes.txt"), Ok(5));
///
/// store.remove("notes.txt").unwrap();
/// assert!(store.size("notes.txt").is_err());
/// ```
pub struct RamFileStore<const FILES: usize = 4, const FILE_SIZE: usize = 8192> {
    files: Vec<RamFile<FILE_SIZE>, FILES>,
}

impl<const FILES: usize, const FILE_SIZE: usize> RamFileStore<FILES, FILE_SIZE> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Number of files currently stored.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the store holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn position(&self, path: &str) -> Option<usize> {
        self.files.iter().position(|f| f.path.as_str() == path)
    }
}

impl<const FILES: usize, const FILE_SIZE: usize> Default for RamFileStore<FILES, FILE_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const FILES: usize, const FILE_SIZE: usize> core::fmt::Debug for RamFileStore<FILES, FILE_SIZE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RamFileStore")
            .field("files", &self.files.len())
            .finish()
    }
}

impl<const FILES: usize, const FILE_SIZE: usize> FileStore for RamFileStore<FILES, FILE_SIZE> {
    fn size(&mut self, path: &str) -> Result<usize, Error> {
        self.position(path)
            .map(|i| self.files[i].data.len())
            .ok_or(Error::NotFound)
    }

    fn load(&mut self, path: &str, buf: &mut [u8]) -> Result<usize, Error> {
        let index = self.position(path).ok_or(Error::NotFound)?;
        let data = &self.files[index].data;
        let len = data.len().min(buf.len());
        buf[..len].copy_from_slice(&data[..len]);
        Ok(len)
    }

    fn store(&mut self, path: &str, data: &[u8]) -> Result<(), Error> {
        if data.len() > FILE_SIZE {
            return Err(Error::NoSpace);
        }

        let mut contents = Vec::new();
        contents.extend_from_slice(data).map_err(|_| Error::NoSpace)?;

        match self.position(path) {
            Some(index) => {
                self.files[index].data = contents;
                Ok(())
            }
            None => {
                let path = String::try_from(path).map_err(|_| Error::PathTooLong)?;
                self.files
                    .push(RamFile { path, data: contents })
                    .map_err(|_| Error::NoSpace)?;
                Ok(())
            }
        }
    }

    fn remove(&mut self, path: &str) -> Result<(), Error> {
        let index = self.position(path).ok_or(Error::NotFound)?;
        self.files.swap_remove(index);
        Ok(())
    }

    fn usage(&mut self) -> Result<StorageUsage, Error> {
        Ok(StorageUsage {
            total: FILES * FILE_SIZE,
            used: self.files.iter().map(|f| f.data.len()).sum(),
        })
    }

    fn for_each_entry(&mut self, visit: &mut dyn FnMut(&str, usize)) -> Result<(), Error> {
        for file in &self.files {
            visit(file.path.as_str(), file.data.len());
        }
        Ok(())
    }
}

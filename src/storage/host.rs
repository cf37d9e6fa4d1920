//! Host-directory file store.
//!
//! `DirStore` maps store paths to files under a root directory using
//! `std::fs`, giving the configuration assembler real open/read/write
//! semantics on hosted targets and in system-level tests.

use std::fs;
use std::path::PathBuf;

use super::error::Error;
use super::{FileStore, StorageUsage};

/// File store backed by a directory on the host filesystem.
///
/// Store paths are interpreted relative to the root directory; nested
/// separators are allowed and intermediate directories are created on
/// write. The reported capacity is the fixed value passed at construction,
/// standing in for the partition size an embedded target would report.
#[derive(Debug)]
pub struct DirStore {
    root: PathBuf,
    capacity: usize,
}

impl DirStore {
    /// Create a store rooted at `root` with a nominal `capacity` in bytes.
    pub fn new(root: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            root: root.into(),
            capacity,
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl FileStore for DirStore {
    fn size(&mut self, path: &str) -> Result<usize, Error> {
        let meta = fs::metadata(self.resolve(path)).map_err(|_| Error::NotFound)?;
        if !meta.is_file() {
            return Err(Error::NotFound);
        }
        Ok(meta.len() as usize)
    }

    fn load(&mut self, path: &str, buf: &mut [u8]) -> Result<usize, Error> {
        let contents = fs::read(self.resolve(path)).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound
            } else {
                Error::ReadError
            }
        })?;
        let len = contents.len().min(buf.len());
        buf[..len].copy_from_slice(&contents[..len]);
        Ok(len)
    }

    fn store(&mut self, path: &str, data: &[u8]) -> Result<(), Error> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|_| Error::WriteError)?;
        }
        fs::write(target, data).map_err(|_| Error::WriteError)
    }

    fn remove(&mut self, path: &str) -> Result<(), Error> {
        fs::remove_file(self.resolve(path)).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound
            } else {
                Error::WriteError
            }
        })
    }

    fn usage(&mut self) -> Result<StorageUsage, Error> {
        let mut used = 0;
        let mut visit = |_: &str, size: usize| used += size;
        self.for_each_entry(&mut visit)?;
        Ok(StorageUsage {
            total: self.capacity,
            used,
        })
    }

    fn for_each_entry(&mut self, visit: &mut dyn FnMut(&str, usize)) -> Result<(), Error> {
        let mut pending: Vec<PathBuf> = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                // An absent root just means nothing has been stored yet.
                Err(_) if dir == self.root => return Ok(()),
                Err(_) => return Err(Error::ReadError),
            };

            for entry in entries {
                let entry = entry.map_err(|_| Error::ReadError)?;
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                    continue;
                }
                let meta = entry.metadata().map_err(|_| Error::ReadError)?;
                let relative: String = path
                    .strip_prefix(&self.root)
                    .map_err(|_| Error::ReadError)?
                    .to_string_lossy()
                    .into_owned();
                visit(&relative, meta.len() as usize);
            }
        }

        Ok(())
    }
}

//! [`CorpusStore`](super::super::CorpusStore) backed by `std::fs`.

use std::fs;
use std::io;
use std::path::Path;

use super::super::{CorpusStore, StoreError};

/// Writes corpora to the local filesystem. Writes are whole-file overwrites.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStore;

impl FsStore {
    /// Creates a filesystem store.
    #[must_use]
    pub fn new() -> Self {
        FsStore
    }
}

fn io_err<'a>(op: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> StoreError + 'a {
    move |source| StoreError::Io {
        op,
        path: path.to_path_buf(),
        source,
    }
}

impl CorpusStore for FsStore {
    fn create_dir(&mut self, dir: &Path) -> Result<(), StoreError> {
        fs::create_dir_all(dir).map_err(io_err("create", dir))
    }

    fn clear_dir(&mut self, dir: &Path) -> Result<bool, StoreError> {
        match fs::remove_dir_all(dir) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_err("clear", dir)(e)),
        }
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), StoreError> {
        fs::write(path, contents).map_err(io_err("write", path))
    }

    fn read(&self, path: &Path) -> Result<String, StoreError> {
        fs::read_to_string(path).map_err(io_err("read", path))
    }
}

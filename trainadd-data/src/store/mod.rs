//! Corpus storage: the directory and file operations the dataset writer needs.
//!
//! This module defines the **trait** ([`CorpusStore`]) and **error** ([`StoreError`]).
//! Implementations are in the `impls` submodule: [`FsStore`] for real output, [`MemoryStore`] for tests.

mod error;
mod impls;

use std::path::Path;

pub use error::StoreError;
pub use impls::{FsStore, MemoryStore};

/// Create/clear/write capability handed to the generator and dataset writer.
pub trait CorpusStore {
    /// Creates `dir` and any missing parents. Succeeds if it already exists.
    fn create_dir(&mut self, dir: &Path) -> Result<(), StoreError>;

    /// Removes `dir` and everything under it. Returns whether it existed.
    fn clear_dir(&mut self, dir: &Path) -> Result<bool, StoreError>;

    /// Writes `contents` to `path`, replacing any previous file. The parent directory must exist.
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), StoreError>;

    /// Reads a file back.
    fn read(&self, path: &Path) -> Result<String, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    fn exercise<S: CorpusStore>(store: &mut S, root: &Path) {
        let dir = root.join("a").join("train");
        let file = dir.join("1桁1桁.txt");

        assert!(store.write(&file, "x").is_err(), "parent missing");
        store.create_dir(&dir).unwrap();
        store.write(&file, "0+0=<0>\n").unwrap();
        assert_eq!(store.read(&file).unwrap(), "0+0=<0>\n");

        store.write(&file, "1+1=<2>\n").unwrap();
        assert_eq!(store.read(&file).unwrap(), "1+1=<2>\n", "overwrite");

        assert!(store.clear_dir(&dir).unwrap());
        assert!(store.read(&file).is_err());
        assert!(!store.clear_dir(&dir).unwrap());
    }

    #[test]
    fn memory_store_contract() {
        let mut store = MemoryStore::new();
        exercise(&mut store, &PathBuf::from("out"));
        assert!(store.has_dir(Path::new("out/a")));
        assert!(!store.has_dir(Path::new("out/a/train")));
    }

    #[test]
    fn fs_store_contract() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FsStore::new();
        exercise(&mut store, tmp.path());
        assert!(tmp.path().join("a").is_dir());
    }

    #[test]
    fn fs_store_io_errors_name_operation_and_path() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.txt");
        let err = FsStore::new().read(&missing).unwrap_err();
        match &err {
            StoreError::Io { op, path, .. } => {
                assert_eq!(*op, "read");
                assert_eq!(path, &missing);
            }
            other => panic!("expected Io, got {other:?}"),
        }
        assert!(err.to_string().starts_with("store: read "));

        let err = FsStore::new()
            .write(&tmp.path().join("no_dir").join("f.txt"), "x")
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { op: "write", .. }));
    }

    #[test]
    fn memory_store_files_in_lists_direct_children() {
        let mut store = MemoryStore::new();
        store.create_dir(Path::new("r/x")).unwrap();
        store.write(Path::new("r/top.txt"), "").unwrap();
        store.write(Path::new("r/x/inner.txt"), "").unwrap();
        assert_eq!(store.files_in(Path::new("r")), [Path::new("r/top.txt")]);
    }
}

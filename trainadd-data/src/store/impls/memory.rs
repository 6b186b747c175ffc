//! In-memory [`CorpusStore`](super::super::CorpusStore): same contract as the filesystem, no side effects.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::super::{CorpusStore, StoreError};

/// Keeps directories and file contents in ordered maps.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All files, keyed by path.
    #[must_use]
    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }

    /// Files directly inside `dir`.
    #[must_use]
    pub fn files_in(&self, dir: &Path) -> Vec<&Path> {
        self.files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .map(PathBuf::as_path)
            .collect()
    }

    /// Returns `true` if `dir` was created and not cleared since.
    #[must_use]
    pub fn has_dir(&self, dir: &Path) -> bool {
        self.dirs.contains(dir)
    }
}

impl CorpusStore for MemoryStore {
    fn create_dir(&mut self, dir: &Path) -> Result<(), StoreError> {
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn clear_dir(&mut self, dir: &Path) -> Result<bool, StoreError> {
        let existed = self.dirs.contains(dir);
        self.dirs.retain(|d| !d.starts_with(dir));
        self.files.retain(|f, _| !f.starts_with(dir));
        Ok(existed)
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), StoreError> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.dirs.contains(parent) => {
                return Err(StoreError::NotFound(parent.to_path_buf()));
            }
            _ => {}
        }
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<String, StoreError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.to_path_buf()))
    }
}

//! [`DataLoader`](super::super::DataLoader) implementation that reads a corpus file (UTF-8, one line per [`DataItem`](super::super::DataItem)).

use std::fs;
use std::path::Path;

use log::debug;

use super::super::{Data, DataError, DataItem, DataLoader};

/// Loads a corpus from a file path (one trimmed line per item; blank lines error).
#[derive(Clone, Debug)]
pub struct PathLoader<P>(pub P);

impl<P> PathLoader<P>
where
    P: AsRef<Path>,
{
    /// Creates a loader for the given path.
    #[must_use]
    pub fn new(path: P) -> Self {
        PathLoader(path)
    }
}

impl<P> DataLoader for PathLoader<P>
where
    P: AsRef<Path>,
{
    fn load(&self) -> Result<Data, DataError> {
        let path = self.0.as_ref();
        let content = fs::read_to_string(path)?;
        let items = content
            .lines()
            .map(DataItem::new)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("loaded {} lines from {}", items.len(), path.display());
        Data::new(items)
    }
}

/// Convenience: load a corpus from a path using [`PathLoader`].
///
/// # Errors
///
/// - [`DataError::Io`] when the path cannot be read or content is not valid UTF-8.
/// - [`DataError::EmptyDataItem`] when a line is empty after trimming.
/// - [`DataError::EmptyFile`] when the file has no lines.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Data, DataError> {
    PathLoader::new(path).load()
}

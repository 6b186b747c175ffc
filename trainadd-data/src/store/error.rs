//! Errors produced by corpus stores.

use std::path::PathBuf;

/// Errors produced by [`CorpusStore`](super::CorpusStore) implementations.
///
/// # Variants
///
/// - **Io**: A filesystem operation failed.
///   *When*: Any [`FsStore`](super::FsStore) call.
///   *Recovery*: Check permissions and free space for `path`.
///
/// - **NotFound**: A file was read, or written into a directory, that does not exist.
///   *When*: [`MemoryStore`](super::MemoryStore) calls that mirror a missing-path I/O failure.
///   *Recovery*: Call [`create_dir`](super::CorpusStore::create_dir) first.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O failure for `path` during `op`.
    #[error("store: {op} {}: {source}", .path.display())]
    Io {
        /// Operation name (e.g. "write").
        op: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The path (or its parent directory) does not exist.
    #[error("store: {} does not exist", .0.display())]
    NotFound(PathBuf),
}

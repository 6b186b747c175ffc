//! Errors produced while writing experiment datasets.

use std::path::PathBuf;

use super::Profile;
use crate::problem::ProblemError;
use crate::store::StoreError;

/// Errors produced by [`DatasetWriter`](super::DatasetWriter).
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// A corpus in a profile table failed to generate or write.
    #[error("dataset: {profile} {split}: {source}")]
    Problem {
        /// Profile being written.
        profile: Profile,
        /// `"train"` or `"test"`.
        split: &'static str,
        /// Underlying error.
        #[source]
        source: ProblemError,
    },

    /// Creating, clearing, or writing a dataset path failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The drill limit was zero.
    #[error("dataset: drill limit must be positive (target {})", .0.display())]
    EmptyDrill(PathBuf),
}

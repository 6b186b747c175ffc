//! Crate-level error: every module error converts into [`Error`] via `?`.

use crate::config::ConfigError;
use crate::curriculum::CurriculumError;
use crate::data::DataError;
use crate::dataset::DatasetError;
use crate::problem::ProblemError;
use crate::sampler::SamplerError;
use crate::store::StoreError;
use crate::tokenizer::TokenizerError;

/// Any error produced by `trainadd-data`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or unreadable configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Vocabulary, encode/decode, or causal tensor failure.
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    /// Invalid digit count or rate.
    #[error(transparent)]
    Sampler(#[from] SamplerError),

    /// Corpus generation failure.
    #[error(transparent)]
    Problem(#[from] ProblemError),

    /// Line without answer markers.
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),

    /// Storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Profile or drill writing failure.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Corpus loading or training item failure.
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

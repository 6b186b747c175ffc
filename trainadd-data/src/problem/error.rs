//! Errors produced when generating or writing an addition corpus.

use super::AdditionSpec;
use crate::sampler::SamplerError;
use crate::store::StoreError;

/// Errors produced by the problem generator.
///
/// # Variants
///
/// - **TooManySamples**: `|S1| * |S2|` exceeds the sample cap.
///   *When*: Before sampling, from the target counts of both operands.
///   *Recovery*: Lower the rates or raise the cap deliberately.
///
/// - **Sampler**: An operand range or rate was invalid.
///
/// - **Store**: Writing the corpus failed.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    /// The pair count would exceed the cap.
    #[error("problem: {spec} yields {count} pairs, over the cap of {cap}")]
    TooManySamples {
        /// The offending configuration.
        spec: AdditionSpec,
        /// `|S1| * |S2|`.
        count: u64,
        /// The configured cap.
        cap: u64,
    },

    /// Invalid digit count or rate.
    #[error("problem: {spec}: {source}")]
    Sampler {
        /// The offending configuration.
        spec: AdditionSpec,
        /// Underlying sampler error.
        #[source]
        source: SamplerError,
    },

    /// Corpus could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

//! Errors produced when expanding an equation record into curriculum steps.

/// Errors produced by [`expand`](super::expand).
///
/// Both variants mean the line is not an equation record (e.g. a bare drill line or a truncated file).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurriculumError {
    /// No BOS marker in the text.
    #[error("curriculum: no {bos:?} marker in {text:?}")]
    MissingBos {
        /// The expected marker.
        bos: char,
        /// The offending text.
        text: String,
    },

    /// No EOS marker after the BOS marker.
    #[error("curriculum: no {eos:?} marker after the answer start in {text:?}")]
    MissingEos {
        /// The expected marker.
        eos: char,
        /// The offending text.
        text: String,
    },
}

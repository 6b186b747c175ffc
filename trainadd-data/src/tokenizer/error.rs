//! Errors produced when building a vocabulary, encoding, decoding, or shaping causal tensors.
//!
//! All errors from the tokenizer module use [`TokenizerError`].

/// Errors produced by the tokenizer module.
///
/// # Variants
///
/// - **UnknownSymbol**: A character was encountered that is not in the vocabulary.
///   *When*: During [`encode`](super::Tokenizer::encode) when the input contains a character absent from the corpus the tokenizer was built from.
///   *Recovery*: None; the corpus and the text disagree. Rebuild the tokenizer from a corpus that covers the text.
///
/// - **InvalidId**: A token id is out of range for the vocabulary.
///   *When*: During [`decode`](super::Tokenizer::decode) when an id is not in `[0, vocab_size)`.
///   *Recovery*: Ensure the ids were produced by this tokenizer's `encode`.
///
/// - **PadCollision**: The pad symbol already occurs in the corpus.
///   *When*: During [`CharTokenizer::build`](super::CharTokenizer::build).
///   *Recovery*: Pick a pad symbol that the corpus never uses.
///
/// - **SequenceTooShort** / **SeqLenTooShort**: The ids cannot be shaped into a causal tensor.
///   *When*: During [`make_causal_tensor`](super::make_causal_tensor).
///   *Recovery*: Pass at least two ids and a `seq_len` of at least `ids.len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizerError {
    /// A character not in the vocabulary was encountered during encode.
    #[error("tokenizer: unknown symbol {0:?}")]
    UnknownSymbol(char),

    /// A token id is out of range during decode.
    #[error("tokenizer: invalid id {0}")]
    InvalidId(usize),

    /// The pad symbol occurs in the corpus, so its id would collide with a real character.
    #[error("tokenizer: pad symbol {0:?} occurs in the corpus")]
    PadCollision(char),

    /// Fewer than two ids: there is no context to predict the last token from.
    #[error("tokenizer: causal tensor needs at least 2 ids, got {len}")]
    SequenceTooShort {
        /// Number of ids passed in.
        len: usize,
    },

    /// `seq_len` cannot hold the input part of the sequence.
    #[error("tokenizer: seq_len {seq_len} is shorter than the {required} input ids")]
    SeqLenTooShort {
        /// Requested tensor width.
        seq_len: usize,
        /// Minimum width (`ids.len() - 1`).
        required: usize,
    },
}

//! Tokenization: encode text to token ids, decode back, and shape causal training tensors.
//!
//! This module defines the **trait** ([`Tokenizer`]) and **error** ([`TokenizerError`]).
//! Implementations live in the `impls` submodule (e.g. [`CharTokenizer`] for character-level).
//! Fixed-width tensor construction lives in the `causal` submodule ([`make_causal_tensor`]).

mod causal;
mod error;
mod impls;
mod vocab;

pub use causal::{make_causal_tensor, CausalTensor, IGNORE_INDEX};
pub use error::TokenizerError;
pub use impls::{CharTokenizer, DEFAULT_PAD};
pub use vocab::Vocab;

/// Trait for tokenizers: encode text to ids and decode ids to text.
pub trait Tokenizer {
    /// Encodes a string into a sequence of token ids.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::UnknownSymbol`] if a character is not in the vocabulary.
    fn encode(&self, s: &str) -> Result<Vec<usize>, TokenizerError>;

    /// Decodes a sequence of token ids into a string.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::InvalidId`] if an id is out of range.
    fn decode(&self, ids: &[usize]) -> Result<String, TokenizerError>;

    /// Vocabulary size (number of distinct tokens, pad included).
    fn vocab_size(&self) -> usize;

    /// Token id used for right padding.
    fn pad_id(&self) -> usize;

    /// Shapes `ids` into a [`CausalTensor`] of width `seq_len`, padding with [`Tokenizer::pad_id`].
    ///
    /// # Errors
    ///
    /// See [`make_causal_tensor`].
    fn make_causal(&self, ids: &[usize], seq_len: usize) -> Result<CausalTensor, TokenizerError> {
        make_causal_tensor(ids, seq_len, self.pad_id())
    }
}

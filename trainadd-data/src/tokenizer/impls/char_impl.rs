//! Character-level tokenizer: one token per character, vocab = sorted corpus chars + pad.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::super::Vocab;
use super::super::{Tokenizer, TokenizerError};

/// Default pad symbol; never produced by the problem generator.
pub const DEFAULT_PAD: char = '□';

/// Character-level tokenizer. The pad symbol always holds the highest id.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawCharTokenizer")]
pub struct CharTokenizer {
    vocab: Vocab,
    pad_id: usize,
}

/// Unchecked serialized form; the pad must sit on the last id.
#[derive(Deserialize)]
struct RawCharTokenizer {
    vocab: Vocab,
    pad_id: usize,
}

impl TryFrom<RawCharTokenizer> for CharTokenizer {
    type Error = TokenizerError;

    fn try_from(raw: RawCharTokenizer) -> Result<Self, Self::Error> {
        if raw.pad_id + 1 != raw.vocab.len() {
            return Err(TokenizerError::InvalidId(raw.pad_id));
        }
        Ok(CharTokenizer {
            vocab: raw.vocab,
            pad_id: raw.pad_id,
        })
    }
}

impl CharTokenizer {
    /// Builds a tokenizer from a corpus: distinct characters in sorted order, then `pad`.
    ///
    /// # Errors
    ///
    /// - [`TokenizerError::PadCollision`] when `pad` occurs in `corpus`.
    pub fn build(corpus: &str, pad: char) -> Result<Self, TokenizerError> {
        let chars: BTreeSet<char> = corpus.chars().collect();
        if chars.contains(&pad) {
            return Err(TokenizerError::PadCollision(pad));
        }
        let pad_id = chars.len();
        let vocab = Vocab::new(chars.into_iter().chain(std::iter::once(pad)));
        Ok(CharTokenizer { vocab, pad_id })
    }

    /// The pad character.
    #[must_use]
    pub fn pad_symbol(&self) -> char {
        self.vocab.symbols()[self.pad_id]
    }

    /// The underlying vocabulary.
    #[must_use]
    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    /// Serializes the tokenizer so a training harness can reuse the exact id assignment.
    ///
    /// # Errors
    ///
    /// Propagates [`serde_json::Error`].
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restores a tokenizer written by [`CharTokenizer::to_json`].
    ///
    /// # Errors
    ///
    /// Propagates [`serde_json::Error`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Tokenizer for CharTokenizer {
    fn encode(&self, s: &str) -> Result<Vec<usize>, TokenizerError> {
        s.chars()
            .map(|c| self.vocab.get_id(c).ok_or(TokenizerError::UnknownSymbol(c)))
            .collect()
    }

    fn decode(&self, ids: &[usize]) -> Result<String, TokenizerError> {
        ids.iter()
            .map(|&id| self.vocab.get_symbol(id).ok_or(TokenizerError::InvalidId(id)))
            .collect()
    }

    fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    fn pad_id(&self) -> usize {
        self.pad_id
    }
}

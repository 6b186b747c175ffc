//! [`CurriculumDataset`]: a corpus expanded into curriculum steps, served as causal tensors.

use log::info;

use super::{Data, DataError};
use crate::curriculum;
use crate::markers::Markers;
use crate::tokenizer::{CausalTensor, CharTokenizer, Tokenizer, TokenizerError};

/// Every curriculum step of every corpus line, with a tokenizer built from the whole corpus.
#[derive(Clone, Debug)]
pub struct CurriculumDataset {
    steps: Vec<String>,
    tokenizer: CharTokenizer,
    seq_len: usize,
}

impl CurriculumDataset {
    /// Expands each line of `data` and builds the tokenizer from [`Data::corpus`].
    ///
    /// # Errors
    ///
    /// - [`DataError::Curriculum`] for a line without markers.
    /// - [`DataError::Tokenizer`] when `pad` occurs in the corpus, or the longest step does not
    ///   fit in `seq_len` (checked up front so [`CurriculumDataset::get`] cannot fail on width).
    pub fn new(
        data: &Data,
        markers: Markers,
        pad: char,
        seq_len: usize,
    ) -> Result<Self, DataError> {
        let tokenizer = CharTokenizer::build(&data.corpus(), pad)?;

        let mut steps = Vec::new();
        for (idx, item) in data.items().iter().enumerate() {
            let expanded = curriculum::expand(item.as_str(), markers).map_err(|source| {
                DataError::Curriculum {
                    line: idx + 1,
                    source,
                }
            })?;
            steps.extend(expanded);
        }

        let longest = steps.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        if longest > 0 && seq_len < longest - 1 {
            return Err(TokenizerError::SeqLenTooShort {
                seq_len,
                required: longest - 1,
            }
            .into());
        }
        info!(
            "{} lines -> {} curriculum steps (vocab {}, seq_len {seq_len})",
            data.len(),
            steps.len(),
            tokenizer.vocab_size()
        );
        Ok(CurriculumDataset {
            steps,
            tokenizer,
            seq_len,
        })
    }

    /// Number of curriculum steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if there are no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Tensor width.
    #[must_use]
    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    /// The tokenizer built from the corpus.
    #[must_use]
    pub fn tokenizer(&self) -> &CharTokenizer {
        &self.tokenizer
    }

    /// The text of step `index`.
    #[must_use]
    pub fn step(&self, index: usize) -> Option<&str> {
        self.steps.get(index).map(String::as_str)
    }

    /// Encodes step `index` and shapes it into a [`CausalTensor`].
    ///
    /// # Errors
    ///
    /// - [`DataError::IndexOutOfRange`] when `index >= len()`.
    /// - [`DataError::Tokenizer`] if the step cannot be shaped (a one-character step).
    pub fn get(&self, index: usize) -> Result<CausalTensor, DataError> {
        let text = self.step(index).ok_or(DataError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        let ids = self.tokenizer.encode(text)?;
        Ok(self.tokenizer.make_causal(&ids, self.seq_len)?)
    }

    /// All items in order.
    pub fn iter(&self) -> impl Iterator<Item = Result<CausalTensor, DataError>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}

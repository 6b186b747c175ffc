//! Errors produced when loading a corpus or building training items from it.
//!
//! All errors from the data module use [`DataError`].

use crate::curriculum::CurriculumError;
use crate::tokenizer::TokenizerError;

/// Errors produced by the data module.
///
/// # Variants
///
/// - **Io**: Failed to read the file (e.g. file not found, permission denied, invalid UTF-8).
///   *When*: Opening or reading the path in [`PathLoader`](super::PathLoader) or [`load_from_path`](super::load_from_path).
///   *Recovery*: Ensure the path exists, is readable, and contains valid UTF-8.
///
/// - **EmptyFile**: The file was read successfully but yields no lines.
///   *When*: After reading, when the resulting [`Data`](super::Data) would be empty.
///   *Recovery*: Provide a corpus with at least one equation.
///
/// - **EmptyDataItem**: A line was empty after trimming.
///   *When*: When building a [`DataItem`](super::DataItem) from a blank line.
///   *Recovery*: Remove the blank line from the corpus.
///
/// - **Curriculum** / **Tokenizer**: A line could not be expanded, encoded, or shaped.
///   *When*: Building a [`CurriculumDataset`](super::CurriculumDataset) or fetching an item from it.
///   *Recovery*: Check the markers and pad symbol match the corpus, and that `seq_len` fits the longest line.
///
/// - **IndexOutOfRange**: An item index past the end of a [`CurriculumDataset`](super::CurriculumDataset).
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// I/O error while reading the input file.
    #[error("data io: {0}")]
    Io(#[from] std::io::Error),

    /// The input file yields no lines.
    #[error("data: input file is empty")]
    EmptyFile,

    /// A line was empty after trimming.
    #[error("data: empty line (data item) in input")]
    EmptyDataItem,

    /// A corpus line is not an equation record.
    #[error("data: line {line}: {source}")]
    Curriculum {
        /// 1-based line number in the corpus.
        line: usize,
        /// Underlying error.
        #[source]
        source: CurriculumError,
    },

    /// Vocabulary build, encode, or tensor shaping failed.
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    /// Item index past the end of the dataset.
    #[error("data: index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Dataset length.
        len: usize,
    },
}

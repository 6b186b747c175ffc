//! Types for loaded data: [`DataItem`] (one non-empty line) and [`Data`] (non-empty list of items).
//!
//! Validation at construction ensures empty items and empty data produce the right [`DataError`].

use std::fmt;

use super::DataError;

/// A single non-empty corpus line (trimmed), e.g. one equation record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataItem(String);

impl DataItem {
    /// Creates a [`DataItem`] from a line (trimmed).
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyDataItem`] when `line` is empty or only whitespace.
    pub fn new(line: &str) -> Result<Self, DataError> {
        let s = line.trim();
        if s.is_empty() {
            return Err(DataError::EmptyDataItem);
        }
        Ok(DataItem(s.to_string()))
    }

    /// Returns the inner string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Loaded corpus: a non-empty list of [`DataItem`]s.
#[derive(Clone, Debug)]
pub struct Data(Vec<DataItem>);

impl Data {
    /// Builds [`Data`] from a non-empty list of items.
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyFile`] when `items` is empty.
    pub fn new(items: Vec<DataItem>) -> Result<Self, DataError> {
        if items.is_empty() {
            return Err(DataError::EmptyFile);
        }
        Ok(Data(items))
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed [`Data`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the items as a slice.
    #[must_use]
    pub fn items(&self) -> &[DataItem] {
        &self.0
    }

    /// The corpus as written by the generator: every line followed by `\n`.
    ///
    /// This is the text the tokenizer vocabulary is built from, so the newline is a token.
    #[must_use]
    pub fn corpus(&self) -> String {
        let mut text = String::new();
        for item in &self.0 {
            text.push_str(item.as_str());
            text.push('\n');
        }
        text
    }
}

//! Vocabulary: bijection between characters and dense token ids.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Maps token ids to characters and back. Ids are contiguous from `0` to `len - 1`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<char>", into = "Vec<char>")]
pub struct Vocab {
    id_to_sym: Vec<char>,
    sym_to_id: HashMap<char, usize>,
}

impl Vocab {
    /// Builds a vocab with the given characters in order. Duplicates are skipped (first occurrence wins).
    #[must_use]
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut id_to_sym = Vec::new();
        let mut sym_to_id = HashMap::new();
        for c in symbols {
            if sym_to_id.contains_key(&c) {
                continue;
            }
            sym_to_id.insert(c, id_to_sym.len());
            id_to_sym.push(c);
        }
        Vocab {
            id_to_sym,
            sym_to_id,
        }
    }

    /// Returns the number of symbols (vocab size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.id_to_sym.len()
    }

    /// Returns `true` if the vocab is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id_to_sym.is_empty()
    }

    /// Returns the character for `id`, or `None` if out of range.
    #[must_use]
    pub fn get_symbol(&self, id: usize) -> Option<char> {
        self.id_to_sym.get(id).copied()
    }

    /// Returns the id for `symbol`, or `None` if not in vocab.
    #[must_use]
    pub fn get_id(&self, symbol: char) -> Option<usize> {
        self.sym_to_id.get(&symbol).copied()
    }

    /// Characters in id order.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.id_to_sym
    }
}

impl From<Vec<char>> for Vocab {
    fn from(symbols: Vec<char>) -> Self {
        Vocab::new(symbols)
    }
}

impl From<Vocab> for Vec<char> {
    fn from(vocab: Vocab) -> Self {
        vocab.id_to_sym
    }
}

//! Fixed-width causal training tensors: one supervised position per example.
//!
//! A curriculum step already ends at the token the model must predict, so the input is every id
//! but the last, and the target row supervises only the position that predicts that last id.

use serde::{Deserialize, Serialize};

use super::TokenizerError;

/// Target value meaning "exclude this position from the loss".
pub const IGNORE_INDEX: i64 = -100;

/// Token ids, attention/loss mask and targets for one example, all exactly `seq_len` wide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CausalTensor {
    /// Input ids (all but the last), right-padded with the pad id.
    pub token_ids: Vec<usize>,
    /// `true` on the valid prefix, `false` on padding.
    pub mask: Vec<bool>,
    /// [`IGNORE_INDEX`] everywhere except the position predicting the final id.
    pub targets: Vec<i64>,
}

impl CausalTensor {
    /// Tensor width (`seq_len`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.token_ids.len()
    }

    /// Returns `true` for a zero-width tensor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token_ids.is_empty()
    }

    /// The supervised `(position, target id)` pair.
    #[must_use]
    pub fn supervised(&self) -> Option<(usize, usize)> {
        self.targets
            .iter()
            .enumerate()
            .find(|&(_, &t)| t != IGNORE_INDEX)
            .map(|(pos, &t)| (pos, t as usize))
    }
}

/// Shapes `ids` into a [`CausalTensor`] of width `seq_len`.
///
/// With `n = ids.len()`: inputs are `ids[..n - 1]` padded with `pad_id`, the mask covers
/// positions `0..n - 2`, and `targets[n - 2] = ids[n - 1]`.
///
/// # Errors
///
/// - [`TokenizerError::SequenceTooShort`] when `n < 2`.
/// - [`TokenizerError::SeqLenTooShort`] when `seq_len < n - 1`.
pub fn make_causal_tensor(
    ids: &[usize],
    seq_len: usize,
    pad_id: usize,
) -> Result<CausalTensor, TokenizerError> {
    let n = ids.len();
    let (&last, inputs) = match ids.split_last() {
        Some(split) if n >= 2 => split,
        _ => return Err(TokenizerError::SequenceTooShort { len: n }),
    };
    if seq_len < inputs.len() {
        return Err(TokenizerError::SeqLenTooShort {
            seq_len,
            required: inputs.len(),
        });
    }

    let mut token_ids = Vec::with_capacity(seq_len);
    token_ids.extend_from_slice(inputs);
    token_ids.resize(seq_len, pad_id);

    let mask = (0..seq_len).map(|pos| pos < n - 2).collect();

    let mut targets = vec![IGNORE_INDEX; seq_len];
    targets[n - 2] = last as i64;

    Ok(CausalTensor {
        token_ids,
        mask,
        targets,
    })
}

//! Implementations of [`Tokenizer`](super::super::Tokenizer).
//!
//! One file per implementation: e.g. `char_impl` for the character-level tokenizer.

mod char_impl;

pub use char_impl::{CharTokenizer, DEFAULT_PAD};

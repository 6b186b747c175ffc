//! # trainadd-data
//!
//! Synthetic addition corpora for causal language models: digit sampling, equation generation
//! with commutative doubling, curriculum expansion of answers, a character tokenizer, and
//! fixed-width training tensors. Experiment layouts probe interpolation and extrapolation across
//! operand digit counts.

pub mod config;
pub mod curriculum;
pub mod data;
pub mod dataset;
pub mod error;
pub mod markers;
pub mod problem;
pub mod sampler;
pub mod store;
pub mod tokenizer;

pub use error::{Error, Result};
pub use markers::{MarkerError, Markers};

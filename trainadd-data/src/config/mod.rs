//! Configuration for dataset generation and tensor shaping.
//!
//! Load from environment via [`from_env`] and validate with [`Config::validate`].
//! Default values and env key names are centralized in the `constants` submodule.

mod builder;
mod constants;
mod error;

use std::path::PathBuf;

use constants::{DEFAULT_DRILL_LIMIT, DEFAULT_OUTPUT_DIR, DEFAULT_SEED, DEFAULT_SEQ_LEN};

use crate::markers::{Markers, DEFAULT_BOS, DEFAULT_EOS};
use crate::problem::{Generator, DEFAULT_SAMPLE_CAP};
use crate::tokenizer::DEFAULT_PAD;

pub use builder::{env_key, env_parsed, env_string, from_env};
pub use error::ConfigError;

/// Central configuration for the trainadd pipeline.
///
/// Use [`from_env`] to build from environment variables and [`Config::validate`] before use.
#[derive(Clone, Debug)]
pub struct Config {
    /// Seed for the sampling RNG.
    pub seed: u64,
    /// Root directory for generated corpora.
    pub output_dir: PathBuf,

    /// Causal tensor width.
    pub seq_len: usize,
    /// Drill corpus covers `0..drill_limit` for both operands.
    pub drill_limit: u64,
    /// Maximum `|S1| * |S2|` per corpus file.
    pub sample_cap: u64,

    /// Beginning-of-answer marker.
    pub bos: char,
    /// End-of-answer marker.
    pub eos: char,
    /// Pad symbol (highest token id).
    pub pad: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seq_len: DEFAULT_SEQ_LEN,
            drill_limit: DEFAULT_DRILL_LIMIT,
            sample_cap: DEFAULT_SAMPLE_CAP,
            bos: DEFAULT_BOS,
            eos: DEFAULT_EOS,
            pad: DEFAULT_PAD,
        }
    }
}

impl Config {
    /// Validates configuration. Returns `Ok(())` if valid, or a [`ConfigError`].
    ///
    /// Ensures: usable, distinct markers; pad distinct from markers and equation characters;
    /// `seq_len >= 2`; positive drill limit and sample cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.markers().check()?;
        if !Markers::is_reserved_free(self.pad) || self.pad == self.bos || self.pad == self.eos {
            return Err(ConfigError::Validation(format!(
                "pad {:?} must differ from digits, operators, newline and both markers",
                self.pad
            )));
        }
        if self.seq_len < 2 {
            return Err(ConfigError::Validation(
                "seq_len must be at least 2".to_string(),
            ));
        }
        if self.drill_limit == 0 {
            return Err(ConfigError::Validation(
                "drill_limit must be greater than 0".to_string(),
            ));
        }
        if self.sample_cap == 0 {
            return Err(ConfigError::Validation(
                "sample_cap must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Answer markers.
    #[must_use]
    pub fn markers(&self) -> Markers {
        Markers {
            bos: self.bos,
            eos: self.eos,
        }
    }

    /// Problem generator using this config's markers and cap.
    #[must_use]
    pub fn generator(&self) -> Generator {
        Generator::new(self.markers(), self.sample_cap)
    }
}

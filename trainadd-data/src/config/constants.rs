//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config builder.
//! Marker, pad and sample-cap defaults live next to the code that uses them.

/// Environment variable prefix (e.g. `TRAINADD_SEED`).
pub(crate) const ENV_PREFIX: &str = "TRAINADD_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_OUTPUT_DIR: &str = "OUTPUT_DIR";
pub(crate) const ENV_SEQ_LEN: &str = "SEQ_LEN";
pub(crate) const ENV_DRILL_LIMIT: &str = "DRILL_LIMIT";
pub(crate) const ENV_SAMPLE_CAP: &str = "SAMPLE_CAP";
pub(crate) const ENV_BOS: &str = "BOS";
pub(crate) const ENV_EOS: &str = "EOS";
pub(crate) const ENV_PAD: &str = "PAD";

// --- Default values ---

pub(crate) const DEFAULT_SEED: u64 = 42;
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "dataset";
pub(crate) const DEFAULT_SEQ_LEN: usize = 15;
pub(crate) const DEFAULT_DRILL_LIMIT: u64 = 10;

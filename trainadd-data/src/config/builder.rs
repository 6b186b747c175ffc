//! Build [`Config`] from environment variables.
//!
//! Uses [`env_string`] and [`env_parsed`] to read env vars with a single place for key names
//! (see the `constants` submodule) and typed errors ([`ConfigError`]).

use std::path::PathBuf;

use super::constants::{
    ENV_BOS, ENV_DRILL_LIMIT, ENV_EOS, ENV_OUTPUT_DIR, ENV_PAD, ENV_PREFIX, ENV_SAMPLE_CAP,
    ENV_SEED, ENV_SEQ_LEN,
};
use super::Config;
use super::ConfigError;

/// Returns the full environment variable key for a given suffix (e.g. `SEED` → `TRAINADD_SEED`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// Returns `Some(value)` if set, `None` if unset, and `Err(ConfigError::EnvVar)` if set but not Unicode.
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into type `T`.
///
/// Returns `Ok(Some(value))` if set and parse succeeds, `Ok(None)` if unset, and
/// `Err(ConfigError::Parse)` if set but parsing fails (e.g. `SEED=abc` for `u64`).
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    match s.parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Builds [`Config`] from environment variables, falling back to [`Config::default`] for unset values.
///
/// Returns [`ConfigError`] if any *set* variable fails to parse (e.g. `TRAINADD_SEED=abc`).
/// Does not validate; call [`Config::validate`] once overrides are applied.
pub fn from_env() -> Result<Config, ConfigError> {
    let default = Config::default();

    let seed = env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed);
    let output_dir = env_string(&env_key(ENV_OUTPUT_DIR))?
        .map(PathBuf::from)
        .unwrap_or_else(|| default.output_dir.clone());
    let seq_len = env_parsed::<usize>(&env_key(ENV_SEQ_LEN))?.unwrap_or(default.seq_len);
    let drill_limit =
        env_parsed::<u64>(&env_key(ENV_DRILL_LIMIT))?.unwrap_or(default.drill_limit);
    let sample_cap = env_parsed::<u64>(&env_key(ENV_SAMPLE_CAP))?.unwrap_or(default.sample_cap);
    let bos = env_parsed::<char>(&env_key(ENV_BOS))?.unwrap_or(default.bos);
    let eos = env_parsed::<char>(&env_key(ENV_EOS))?.unwrap_or(default.eos);
    let pad = env_parsed::<char>(&env_key(ENV_PAD))?.unwrap_or(default.pad);

    Ok(Config {
        seed,
        output_dir,
        seq_len,
        drill_limit,
        sample_cap,
        bos,
        eos,
        pad,
    })
}

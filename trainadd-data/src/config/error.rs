//! Configuration errors.
//!
//! All errors produced by the config module (validation and env loading) use [`ConfigError`].
//! Callers can match on variants to handle specific cases or use [`ConfigError::message`] for logging.

use crate::markers::MarkerError;

/// Errors produced when building or validating configuration.
///
/// # Variants
///
/// - **Validation**: Configuration values are inconsistent or out of range (e.g. `seq_len < 2`).
///   *When*: After building a `Config` and calling `validate()`.
///   *Recovery*: Fix the values (via env or flags) so that `validate()` passes.
///
/// - **Markers**: BOS/EOS are reserved equation characters or equal to each other.
///   *When*: From `validate()`.
///   *Recovery*: Set `TRAINADD_BOS`/`TRAINADD_EOS` to two distinct non-equation characters.
///
/// - **EnvVar**: An environment variable could not be read (e.g. invalid Unicode).
///   *When*: When using env helpers to read a key.
///   *Recovery*: Ensure the variable contains valid Unicode, or unset it.
///
/// - **Parse**: An environment variable was set but could not be parsed into the expected type (e.g. `SEED=abc`).
///   *When*: When using `env_parsed` and the value is not valid for the target type.
///   *Recovery*: Set the env var to a valid value or unset it to use the default.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Configuration validation failed.
    #[error("config validation: {0}")]
    Validation(String),

    /// Answer markers are unusable.
    #[error("config validation: {0}")]
    Markers(#[from] MarkerError),

    /// Failed to read an environment variable.
    #[error("env var {key}: {message}")]
    EnvVar {
        /// The full environment variable name that was read.
        key: String,
        /// Underlying cause (e.g. NotUnicode).
        message: String,
    },

    /// Environment variable was set but could not be parsed into the expected type.
    #[error("env var {key}={value:?}: {message}")]
    Parse {
        /// The full environment variable name.
        key: String,
        /// The raw value that failed to parse.
        value: String,
        /// Human-readable parse reason.
        message: String,
    },
}

impl ConfigError {
    /// Returns a short message suitable for logging or user display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ConfigError::Validation(m) => m,
            ConfigError::Markers(_) => "invalid answer markers",
            ConfigError::EnvVar { message, .. } => message,
            ConfigError::Parse { message, .. } => message,
        }
    }
}

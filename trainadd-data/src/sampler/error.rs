//! Errors produced by the digit sampler.

/// Errors produced when sampling operands.
///
/// # Variants
///
/// - **InvalidDigitCount**: The digit count is 0 or too large for a `u64` sum.
///   *When*: Before any number is drawn.
///   *Recovery*: Use a digit count in `1..=18`.
///
/// - **InvalidRate**: The sampling rate is not a finite value in `[0, 1]`.
///   *When*: Before any number is drawn. A rate above 1 would ask for more distinct values than the range holds.
///   *Recovery*: Bound the rate to `[0, 1]`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplerError {
    /// Digit count outside `1..=MAX_DIGITS`.
    #[error("sampler: digit count {0} is outside 1..=18")]
    InvalidDigitCount(u32),

    /// Rate outside `[0, 1]`.
    #[error("sampler: rate {rate} for {digit_count}-digit numbers is outside [0, 1]")]
    InvalidRate {
        /// Digit count the rate was paired with.
        digit_count: u32,
        /// The rejected rate.
        rate: f64,
    },
}

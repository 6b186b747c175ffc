//! Digit sampler: distinct random integers of a given digit length.
//!
//! The random source is always passed in, so a seeded [`rand::rngs::StdRng`] makes a run reproducible.
//! One-digit numbers cover `0..=9`; longer numbers cover `10^(d-1)..=10^d - 1`.

mod error;

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

pub use error::SamplerError;

/// Largest digit count whose pairwise sums still fit in `u64`.
pub const MAX_DIGITS: u32 = 18;

/// Inclusive range of `digit_count`-digit numbers.
///
/// # Errors
///
/// - [`SamplerError::InvalidDigitCount`] when `digit_count` is 0 or above [`MAX_DIGITS`].
pub fn digit_range(digit_count: u32) -> Result<RangeInclusive<u64>, SamplerError> {
    if digit_count == 0 || digit_count > MAX_DIGITS {
        return Err(SamplerError::InvalidDigitCount(digit_count));
    }
    let hi = 10u64.pow(digit_count) - 1;
    let lo = if digit_count == 1 {
        0
    } else {
        10u64.pow(digit_count - 1)
    };
    Ok(lo..=hi)
}

/// Number of distinct values [`sample`] draws: `floor(span * rate)`.
///
/// `span` is `hi - lo` for multi-digit ranges. The one-digit range counts all ten values, so
/// `rate = 1.0` enumerates `0..=9`.
///
/// # Errors
///
/// - [`SamplerError::InvalidDigitCount`] as for [`digit_range`].
/// - [`SamplerError::InvalidRate`] when `rate` is not finite or outside `[0, 1]`.
pub fn target_count(digit_count: u32, rate: f64) -> Result<u64, SamplerError> {
    let range = digit_range(digit_count)?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(SamplerError::InvalidRate { digit_count, rate });
    }
    let span = if digit_count == 1 {
        range.end() - range.start() + 1
    } else {
        range.end() - range.start()
    };
    // rate <= 1 keeps the product within the range size
    Ok(((span as f64) * rate).floor() as u64)
}

/// Draws `target_count(digit_count, rate)` distinct integers uniformly from [`digit_range`].
///
/// # Errors
///
/// See [`target_count`].
pub fn sample<R>(rng: &mut R, digit_count: u32, rate: f64) -> Result<BTreeSet<u64>, SamplerError>
where
    R: Rng + ?Sized,
{
    let range = digit_range(digit_count)?;
    let count = target_count(digit_count, rate)?;
    let start = *range.start();
    let size = range.end() - start + 1;
    debug!("sampling {count} of {size} {digit_count}-digit numbers (rate {rate})");

    let (Ok(size), Ok(count)) = (usize::try_from(size), usize::try_from(count)) else {
        return Err(SamplerError::InvalidDigitCount(digit_count));
    };
    let picked = rand::seq::index::sample(rng, size, count)
        .into_iter()
        .map(|offset| start + offset as u64)
        .collect();
    Ok(picked)
}

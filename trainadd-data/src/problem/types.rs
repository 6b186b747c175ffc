//! [`AdditionSpec`]: operand digit counts and sampling rates for one corpus file.

use std::fmt;

/// One digit-pair configuration: `digit1`-digit numbers plus `digit2`-digit numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdditionSpec {
    /// Digit count of the first operand.
    pub digit1: u32,
    /// Digit count of the second operand.
    pub digit2: u32,
    /// Sampling rate for the first operand range.
    pub rate1: f64,
    /// Sampling rate for the second operand range.
    pub rate2: f64,
}

impl AdditionSpec {
    /// Shorthand constructor matching the experiment tables.
    #[must_use]
    pub const fn new(digit1: u32, digit2: u32, rate1: f64, rate2: f64) -> Self {
        AdditionSpec {
            digit1,
            digit2,
            rate1,
            rate2,
        }
    }

    /// Corpus file name for this digit pair, e.g. `4桁2桁.txt`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}桁{}桁.txt", self.digit1, self.digit2)
    }
}

impl fmt::Display for AdditionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-digit (rate {}) + {}-digit (rate {})",
            self.digit1, self.rate1, self.digit2, self.rate2
        )
    }
}

//! Answer-span boundary markers shared by the generator, the curriculum expander and config.

/// Reasons a marker pair cannot be used.
///
/// # Variants
///
/// - **Reserved**: A marker is a digit, `+`, `=` or a line break.
///   *When*: [`Markers::check`], usually from config validation.
///   *Recovery*: Pick a character that never appears in an equation.
///
/// - **Identical**: BOS and EOS are the same character, so the answer span is ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    /// `name` marker `marker` is a reserved equation character.
    #[error("{name} marker {marker:?} clashes with digits, operators or newline")]
    Reserved {
        /// `"bos"` or `"eos"`.
        name: &'static str,
        /// The rejected character.
        marker: char,
    },

    /// Both markers are the same character.
    #[error("bos and eos markers are both {0:?}")]
    Identical(char),
}

/// Default beginning-of-answer marker.
pub const DEFAULT_BOS: char = '<';
/// Default end-of-answer marker.
pub const DEFAULT_EOS: char = '>';

/// BOS/EOS characters delimiting the answer span of an equation record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markers {
    /// Placed right after `=`, before the first answer digit.
    pub bos: char,
    /// Placed right after the last answer digit.
    pub eos: char,
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            bos: DEFAULT_BOS,
            eos: DEFAULT_EOS,
        }
    }
}

impl Markers {
    /// Returns `true` if `c` can serve as a marker: not a digit, operator, or line break.
    #[must_use]
    pub fn is_reserved_free(c: char) -> bool {
        !(c.is_ascii_digit() || c == '+' || c == '=' || c == '\n' || c == '\r')
    }

    /// Checks both markers are usable and differ from each other.
    ///
    /// # Errors
    ///
    /// - [`MarkerError::Reserved`] for the first marker that is an equation character.
    /// - [`MarkerError::Identical`] when `bos == eos`.
    pub fn check(&self) -> Result<(), MarkerError> {
        for (name, marker) in [("bos", self.bos), ("eos", self.eos)] {
            if !Self::is_reserved_free(marker) {
                return Err(MarkerError::Reserved { name, marker });
            }
        }
        if self.bos == self.eos {
            return Err(MarkerError::Identical(self.bos));
        }
        Ok(())
    }

    /// Formats one equation record, `"{a}+{b}={bos}{a+b}{eos}"`.
    #[must_use]
    pub fn equation(&self, a: u64, b: u64) -> String {
        format!("{a}+{b}={}{}{}", self.bos, a + b, self.eos)
    }
}

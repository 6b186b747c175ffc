//! Experiment profiles: fixed train/test tables of digit-pair configurations.

use std::fmt;

use crate::problem::AdditionSpec;

const INTERPOLATION_TRAIN: &[AdditionSpec] = &[
    AdditionSpec::new(1, 1, 1.0, 1.0),
    AdditionSpec::new(2, 1, 1.0, 1.0),
    AdditionSpec::new(2, 2, 0.3, 0.3),
    AdditionSpec::new(4, 1, 0.01, 1.0),
    AdditionSpec::new(4, 2, 0.01, 0.1),
    AdditionSpec::new(4, 4, 3e-3, 3e-3),
    AdditionSpec::new(6, 1, 1e-4, 1.0),
    AdditionSpec::new(6, 2, 1e-4, 0.1),
    AdditionSpec::new(6, 4, 1e-4, 1e-3),
    AdditionSpec::new(6, 6, 3e-5, 3e-5),
];

const INTERPOLATION_TEST: &[AdditionSpec] = &[
    AdditionSpec::new(3, 1, 0.1, 1.0),
    AdditionSpec::new(3, 2, 0.1, 0.1),
    AdditionSpec::new(3, 3, 0.01, 0.01),
    AdditionSpec::new(5, 1, 1e-4, 1.0),
    AdditionSpec::new(5, 2, 1e-4, 0.1),
    AdditionSpec::new(5, 3, 1e-4, 0.01),
    AdditionSpec::new(5, 4, 1e-4, 1e-3),
    AdditionSpec::new(5, 5, 1e-4, 1e-4),
];

const EXTRAPOLATION_TRAIN: &[AdditionSpec] = &[
    AdditionSpec::new(1, 1, 1.0, 1.0),
    AdditionSpec::new(2, 1, 1.0, 1.0),
    AdditionSpec::new(2, 2, 0.3, 0.3),
    AdditionSpec::new(3, 1, 0.1, 1.0),
    AdditionSpec::new(3, 2, 0.1, 0.1),
    AdditionSpec::new(3, 3, 0.01, 0.01),
    AdditionSpec::new(4, 1, 0.01, 1.0),
    AdditionSpec::new(4, 2, 0.01, 0.1),
    AdditionSpec::new(4, 3, 3e-3, 0.01),
    AdditionSpec::new(4, 4, 3e-3, 3e-3),
];

const EXTRAPOLATION_TEST: &[AdditionSpec] = &[
    AdditionSpec::new(5, 1, 1e-4, 1.0),
    AdditionSpec::new(5, 2, 1e-4, 0.1),
    AdditionSpec::new(5, 3, 1e-4, 0.01),
    AdditionSpec::new(5, 4, 1e-4, 1e-3),
    AdditionSpec::new(5, 5, 1e-4, 1e-4),
];

/// A named generalization experiment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    /// Train on 1, 2, 4 and 6 digits; test on 3, 5 and 7-digit sums.
    Interpolation,
    /// Train on 1 to 4 digits; test on 5 digits.
    Extrapolation,
}

impl Profile {
    /// Both profiles, in the order `all` writes them.
    pub const ALL: [Profile; 2] = [Profile::Interpolation, Profile::Extrapolation];

    /// Directory name under the output root.
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Profile::Interpolation => "桁数の内挿",
            Profile::Extrapolation => "桁数の外挿汎化",
        }
    }

    /// Configurations written to `train/`.
    #[must_use]
    pub fn train_specs(self) -> &'static [AdditionSpec] {
        match self {
            Profile::Interpolation => INTERPOLATION_TRAIN,
            Profile::Extrapolation => EXTRAPOLATION_TRAIN,
        }
    }

    /// Configurations written to `test/`.
    #[must_use]
    pub fn test_specs(self) -> &'static [AdditionSpec] {
        match self {
            Profile::Interpolation => INTERPOLATION_TEST,
            Profile::Extrapolation => EXTRAPOLATION_TEST,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Interpolation => f.write_str("interpolation"),
            Profile::Extrapolation => f.write_str("extrapolation"),
        }
    }
}

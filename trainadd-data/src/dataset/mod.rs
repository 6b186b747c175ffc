//! Dataset writer: lays out the interpolation and extrapolation experiments and the drill corpus.
//!
//! Layout under the output root:
//!
//! ```text
//! 桁数の内挿/{train,test}/{d1}桁{d2}桁.txt
//! 桁数の外挿汎化/{train,test}/{d1}桁{d2}桁.txt
//! 足し算ドリル.txt
//! ```

mod error;
mod profiles;

use std::path::{Path, PathBuf};

use log::{info, warn};
use rand::Rng;

use crate::markers::Markers;
use crate::problem::{AdditionSpec, CorpusFile, Generator};
use crate::store::CorpusStore;

pub use error::DatasetError;
pub use profiles::Profile;

/// File name of the exhaustive single-digit drill corpus.
pub const DRILL_FILE_NAME: &str = "足し算ドリル.txt";
/// Training split directory name.
pub const TRAIN_DIR: &str = "train";
/// Test split directory name.
pub const TEST_DIR: &str = "test";

/// How drill lines end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrillStyle {
    /// `i+j=<sum>` with no answer markers.
    #[default]
    Bare,
    /// `i+j=` followed by the marked answer, ready for curriculum expansion.
    Marked,
}

/// Every ordered pair `i+j` for `i, j` in `0..limit`, one line each, row-major.
#[must_use]
pub fn drill_corpus(limit: u64, style: DrillStyle, markers: Markers) -> String {
    let mut corpus = String::new();
    for i in 0..limit {
        for j in 0..limit {
            match style {
                DrillStyle::Bare => corpus.push_str(&format!("{i}+{j}={}", i + j)),
                DrillStyle::Marked => corpus.push_str(&markers.equation(i, j)),
            }
            corpus.push('\n');
        }
    }
    corpus
}

/// Files written for one profile.
#[derive(Clone, Debug)]
pub struct ProfileReport {
    /// The profile written.
    pub profile: Profile,
    /// `root/<profile dir>`.
    pub dir: PathBuf,
    /// One entry per train configuration, in table order.
    pub train: Vec<CorpusFile>,
    /// One entry per test configuration, in table order.
    pub test: Vec<CorpusFile>,
}

impl ProfileReport {
    /// Total equation lines across both splits.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.train.iter().chain(&self.test).map(|f| f.lines).sum()
    }
}

/// Writes experiment corpora through a [`CorpusStore`].
pub struct DatasetWriter<'a, S: ?Sized> {
    store: &'a mut S,
    generator: Generator,
}

impl<'a, S> DatasetWriter<'a, S>
where
    S: CorpusStore + ?Sized,
{
    /// Creates a writer over `store`.
    pub fn new(store: &'a mut S, generator: Generator) -> Self {
        DatasetWriter { store, generator }
    }

    /// Clears `root/<profile>/train` and `root/<profile>/test`, then writes every table entry.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::Store`] when a directory cannot be created or cleared.
    /// - [`DatasetError::Problem`] for the first configuration that fails; later ones are not written.
    pub fn write_profile<R>(
        &mut self,
        rng: &mut R,
        root: &Path,
        profile: Profile,
    ) -> Result<ProfileReport, DatasetError>
    where
        R: Rng + ?Sized,
    {
        let dir = root.join(profile.dir_name());
        self.store.create_dir(&dir)?;
        let train_dir = dir.join(TRAIN_DIR);
        let test_dir = dir.join(TEST_DIR);
        for split_dir in [&train_dir, &test_dir] {
            if self.store.clear_dir(split_dir)? {
                warn!("removed existing {}", split_dir.display());
            }
        }

        info!("writing {profile} profile to {}", dir.display());
        let train = self.write_split(rng, profile, TRAIN_DIR, &train_dir, profile.train_specs())?;
        let test = self.write_split(rng, profile, TEST_DIR, &test_dir, profile.test_specs())?;
        let report = ProfileReport {
            profile,
            dir,
            train,
            test,
        };
        info!(
            "{profile}: {} train + {} test files, {} lines",
            report.train.len(),
            report.test.len(),
            report.total_lines()
        );
        Ok(report)
    }

    fn write_split<R>(
        &mut self,
        rng: &mut R,
        profile: Profile,
        split: &'static str,
        dir: &Path,
        specs: &[AdditionSpec],
    ) -> Result<Vec<CorpusFile>, DatasetError>
    where
        R: Rng + ?Sized,
    {
        specs
            .iter()
            .map(|spec| {
                self.generator
                    .write_corpus(&mut *self.store, &mut *rng, dir, spec)
                    .map_err(|source| DatasetError::Problem {
                        profile,
                        split,
                        source,
                    })
            })
            .collect()
    }

    /// Writes `root/足し算ドリル.txt` with every pair in `0..limit`.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::EmptyDrill`] when `limit` is 0.
    /// - [`DatasetError::Store`] when the file cannot be written.
    pub fn write_drill(
        &mut self,
        root: &Path,
        limit: u64,
        style: DrillStyle,
    ) -> Result<CorpusFile, DatasetError> {
        let path = root.join(DRILL_FILE_NAME);
        if limit == 0 {
            return Err(DatasetError::EmptyDrill(path));
        }
        let corpus = drill_corpus(limit, style, self.generator.markers());
        self.store.create_dir(root)?;
        self.store.write(&path, &corpus)?;
        let lines = corpus.lines().count();
        info!("wrote drill {} ({lines} lines)", path.display());
        Ok(CorpusFile { path, lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::curriculum;
    use crate::store::MemoryStore;

    #[test]
    fn drill_limit_three_has_nine_distinct_lines() {
        let corpus = drill_corpus(3, DrillStyle::Bare, Markers::default());
        let lines: Vec<&str> = corpus.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "0+0=0");
        assert_eq!(lines[1], "0+1=1");
        assert_eq!(lines[3], "1+0=1");
        assert_eq!(lines[8], "2+2=4");
        let unique: HashSet<&str> = lines.iter().copied().collect();
        assert_eq!(unique.len(), 9);
        assert!(!corpus.contains('<') && !corpus.contains('>'));
    }

    #[test]
    fn marked_drill_expands_into_curriculum() {
        let corpus = drill_corpus(10, DrillStyle::Marked, Markers::default());
        assert_eq!(corpus.lines().count(), 100);
        assert_eq!(corpus.lines().last(), Some("9+9=<18>"));
        let steps: usize = corpus
            .lines()
            .map(|l| curriculum::expand(l, Markers::default()).unwrap().len())
            .sum();
        // 55 single-digit sums (answer + EOS) and 45 two-digit sums
        assert_eq!(steps, 55 * 2 + 45 * 3);
    }

    #[test]
    fn write_drill_places_file_at_root() {
        let mut store = MemoryStore::new();
        let mut writer = DatasetWriter::new(&mut store, Generator::default());
        let file = writer
            .write_drill(Path::new("dataset"), 10, DrillStyle::Bare)
            .unwrap();
        assert_eq!(file.path, Path::new("dataset").join(DRILL_FILE_NAME));
        assert_eq!(file.lines, 100);
    }

    #[test]
    fn write_drill_rejects_zero_limit() {
        let mut store = MemoryStore::new();
        let mut writer = DatasetWriter::new(&mut store, Generator::default());
        let result = writer.write_drill(Path::new("dataset"), 0, DrillStyle::Bare);
        assert!(matches!(result, Err(DatasetError::EmptyDrill(_))));
        assert!(store.files().is_empty());
    }

    #[test]
    fn profile_tables_match_experiment_design() {
        let digits = |specs: &[AdditionSpec]| -> Vec<(u32, u32)> {
            specs.iter().map(|s| (s.digit1, s.digit2)).collect()
        };
        assert_eq!(
            digits(Profile::Interpolation.train_specs()),
            [(1, 1), (2, 1), (2, 2), (4, 1), (4, 2), (4, 4), (6, 1), (6, 2), (6, 4), (6, 6)]
        );
        assert_eq!(
            digits(Profile::Interpolation.test_specs()),
            [(3, 1), (3, 2), (3, 3), (5, 1), (5, 2), (5, 3), (5, 4), (5, 5)]
        );
        assert_eq!(
            digits(Profile::Extrapolation.train_specs()),
            [(1, 1), (2, 1), (2, 2), (3, 1), (3, 2), (3, 3), (4, 1), (4, 2), (4, 3), (4, 4)]
        );
        assert_eq!(
            digits(Profile::Extrapolation.test_specs()),
            [(5, 1), (5, 2), (5, 3), (5, 4), (5, 5)]
        );
        assert_eq!(Profile::Interpolation.train_specs()[5].rate1, 3e-3);
        assert_eq!(Profile::Extrapolation.train_specs()[8].rate2, 0.01);
    }

    #[test]
    fn write_profile_clears_stale_files() {
        let mut store = MemoryStore::new();
        let stale_dir = Path::new("ds").join(Profile::Extrapolation.dir_name()).join(TEST_DIR);
        store.create_dir(&stale_dir).unwrap();
        store.write(&stale_dir.join("9桁9桁.txt"), "stale").unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let report = DatasetWriter::new(&mut store, Generator::default())
            .write_profile(&mut rng, Path::new("ds"), Profile::Extrapolation)
            .unwrap();
        assert_eq!(report.train.len(), 10);
        assert_eq!(report.test.len(), 5);
        assert!(store.read(&stale_dir.join("9桁9桁.txt")).is_err());
        assert_eq!(store.files().len(), 15);
    }
}

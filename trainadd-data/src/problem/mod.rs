//! Problem generator: addition equation records for one digit-pair configuration.
//!
//! Every sampled pair `(i, j)` is written twice, as `i+j=<s>` and `j+i=<s>`, so commutativity is in
//! the data rather than left for the model to infer.

mod error;
mod types;

use std::path::{Path, PathBuf};

use log::info;
use rand::Rng;

use crate::markers::Markers;
use crate::sampler;
use crate::store::CorpusStore;

pub use error::ProblemError;
pub use types::AdditionSpec;

/// Maximum `|S1| * |S2|` per corpus file.
pub const DEFAULT_SAMPLE_CAP: u64 = 10_000;

/// A corpus file written by [`Generator::write_corpus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorpusFile {
    /// Where the corpus was written.
    pub path: PathBuf,
    /// Number of equation lines.
    pub lines: usize,
}

/// Formats addition corpora with the configured markers, bounded by a sample cap.
#[derive(Clone, Copy, Debug)]
pub struct Generator {
    markers: Markers,
    sample_cap: u64,
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new(Markers::default(), DEFAULT_SAMPLE_CAP)
    }
}

impl Generator {
    /// Creates a generator.
    #[must_use]
    pub fn new(markers: Markers, sample_cap: u64) -> Self {
        Generator {
            markers,
            sample_cap,
        }
    }

    /// Markers placed around every answer.
    #[must_use]
    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Samples both operand sets and returns the corpus text, one record per line.
    ///
    /// Pairs are visited in ascending order of the first then the second operand.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::Sampler`] for an invalid digit count or rate.
    /// - [`ProblemError::TooManySamples`] when the pair count exceeds the cap; nothing is sampled.
    pub fn generate<R>(&self, rng: &mut R, spec: &AdditionSpec) -> Result<String, ProblemError>
    where
        R: Rng + ?Sized,
    {
        let wrap = |source| ProblemError::Sampler {
            spec: *spec,
            source,
        };
        let n1 = sampler::target_count(spec.digit1, spec.rate1).map_err(wrap)?;
        let n2 = sampler::target_count(spec.digit2, spec.rate2).map_err(wrap)?;
        let count = n1.saturating_mul(n2);
        info!("{}桁+{}桁: {count} pairs", spec.digit1, spec.digit2);
        if count > self.sample_cap {
            return Err(ProblemError::TooManySamples {
                spec: *spec,
                count,
                cap: self.sample_cap,
            });
        }

        let first = sampler::sample(rng, spec.digit1, spec.rate1).map_err(wrap)?;
        let second = sampler::sample(rng, spec.digit2, spec.rate2).map_err(wrap)?;

        let mut corpus = String::new();
        for &i in &first {
            for &j in &second {
                corpus.push_str(&self.markers.equation(i, j));
                corpus.push('\n');
                corpus.push_str(&self.markers.equation(j, i));
                corpus.push('\n');
            }
        }
        Ok(corpus)
    }

    /// Generates a corpus and writes it to `dir/{digit1}桁{digit2}桁.txt`, creating `dir` if needed.
    ///
    /// # Errors
    ///
    /// Anything from [`Generator::generate`], plus [`ProblemError::Store`].
    pub fn write_corpus<S, R>(
        &self,
        store: &mut S,
        rng: &mut R,
        dir: &Path,
        spec: &AdditionSpec,
    ) -> Result<CorpusFile, ProblemError>
    where
        S: CorpusStore + ?Sized,
        R: Rng + ?Sized,
    {
        let corpus = self.generate(rng, spec)?;
        store.create_dir(dir)?;
        let path = dir.join(spec.file_name());
        store.write(&path, &corpus)?;
        let lines = corpus.lines().count();
        info!("wrote {} ({lines} lines)", path.display());
        Ok(CorpusFile { path, lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::store::MemoryStore;

    fn parse(line: &str) -> (u64, u64, u64) {
        let (question, answer) = line.split_once("=<").unwrap();
        let (a, b) = question.split_once('+').unwrap();
        let sum = answer.strip_suffix('>').unwrap();
        (a.parse().unwrap(), b.parse().unwrap(), sum.parse().unwrap())
    }

    #[test]
    fn generate_doubles_every_pair() {
        let mut rng = StdRng::seed_from_u64(42);
        let spec = AdditionSpec::new(2, 1, 0.1, 1.0);
        let corpus = Generator::default().generate(&mut rng, &spec).unwrap();
        let lines: Vec<&str> = corpus.lines().collect();
        assert_eq!(lines.len(), 2 * 8 * 10);

        let mut seen: HashMap<(u64, u64), u64> = HashMap::new();
        for line in &lines {
            let (a, b, sum) = parse(line);
            assert_eq!(a + b, sum);
            seen.insert((a, b), sum);
        }
        for (&(a, b), &sum) in &seen {
            assert_eq!(seen.get(&(b, a)), Some(&sum), "{b}+{a} missing");
        }
    }

    #[test]
    fn generate_emits_pair_and_swap_adjacent() {
        let mut rng = StdRng::seed_from_u64(5);
        let spec = AdditionSpec::new(1, 1, 1.0, 1.0);
        let corpus = Generator::default().generate(&mut rng, &spec).unwrap();
        let lines: Vec<&str> = corpus.lines().collect();
        assert_eq!(lines.len(), 200);
        assert_eq!(lines[0], "0+0=<0>");
        assert_eq!(lines[2], "0+1=<1>");
        assert_eq!(lines[3], "1+0=<1>");
        assert!(corpus.ends_with(">\n"));
    }

    #[test]
    fn generate_rejects_too_many_samples() {
        let mut rng = StdRng::seed_from_u64(0);
        let spec = AdditionSpec::new(3, 2, 1.0, 1.0);
        let err = Generator::default().generate(&mut rng, &spec).unwrap_err();
        assert!(matches!(
            err,
            ProblemError::TooManySamples {
                count: 80_011,
                cap: DEFAULT_SAMPLE_CAP,
                ..
            }
        ));
        assert!(err.to_string().contains("3-digit"));
    }

    #[test]
    fn generate_accepts_count_at_cap() {
        let mut rng = StdRng::seed_from_u64(0);
        let spec = AdditionSpec::new(1, 1, 1.0, 1.0);
        let generator = Generator::new(Markers::default(), 100);
        assert!(generator.generate(&mut rng, &spec).is_ok());
        let tight = Generator::new(Markers::default(), 99);
        assert!(tight.generate(&mut rng, &spec).is_err());
    }

    #[test]
    fn generate_reports_invalid_rate_with_spec() {
        let mut rng = StdRng::seed_from_u64(0);
        let spec = AdditionSpec::new(2, 2, 1.5, 0.1);
        let err = Generator::default().generate(&mut rng, &spec).unwrap_err();
        assert!(matches!(err, ProblemError::Sampler { .. }));
        assert!(err.to_string().contains("rate 1.5"));
    }

    #[test]
    fn generate_zero_rate_gives_empty_corpus() {
        let mut rng = StdRng::seed_from_u64(0);
        let spec = AdditionSpec::new(3, 1, 0.0, 1.0);
        assert_eq!(Generator::default().generate(&mut rng, &spec).unwrap(), "");
    }

    #[test]
    fn generate_uses_custom_markers() {
        let mut rng = StdRng::seed_from_u64(0);
        let markers = Markers { bos: '[', eos: ']' };
        let spec = AdditionSpec::new(1, 1, 0.2, 0.2);
        let corpus = Generator::new(markers, DEFAULT_SAMPLE_CAP)
            .generate(&mut rng, &spec)
            .unwrap();
        assert!(corpus.lines().all(|l| l.contains("=[") && l.ends_with(']')));
    }

    #[test]
    fn write_corpus_names_file_by_digit_pair() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = MemoryStore::new();
        let dir = Path::new("out/train");
        let spec = AdditionSpec::new(4, 2, 0.01, 0.1);
        let file = Generator::default()
            .write_corpus(&mut store, &mut rng, dir, &spec)
            .unwrap();
        assert_eq!(file.path, dir.join("4桁2桁.txt"));
        assert_eq!(file.lines, 2 * 89 * 8);
        assert_eq!(store.read(&file.path).unwrap().lines().count(), file.lines);
    }

    #[test]
    fn write_corpus_overwrites_same_pair() {
        let mut store = MemoryStore::new();
        let dir = Path::new("out");
        let spec = AdditionSpec::new(1, 1, 0.1, 0.1);
        let g = Generator::default();
        g.write_corpus(&mut store, &mut StdRng::seed_from_u64(1), dir, &spec)
            .unwrap();
        g.write_corpus(&mut store, &mut StdRng::seed_from_u64(2), dir, &spec)
            .unwrap();
        assert_eq!(store.files().len(), 1);
    }
}

//! Corpus loading and curriculum training items.
//!
//! This module defines the **trait** ([`DataLoader`]), **models** ([`DataItem`], [`Data`]), and **error** ([`DataError`]).
//! Implementations (e.g. [`PathLoader`] for file paths) are in the `impls` submodule.
//! [`CurriculumDataset`] turns a loaded corpus into the fixed-width tensors a training harness consumes.

mod error;
mod impls;
mod steps;
mod types;

pub use error::DataError;
pub use impls::{load_from_path, PathLoader};
pub use steps::CurriculumDataset;
pub use types::{Data, DataItem};

/// Trait for loading a corpus.
pub trait DataLoader {
    /// Loads data. Returns [`Data`] or a [`DataError`].
    fn load(&self) -> Result<Data, DataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as _;
    use std::io::Write;
    use std::path::Path;

    use crate::markers::Markers;
    use crate::tokenizer::{Tokenizer, TokenizerError, DEFAULT_PAD, IGNORE_INDEX};

    fn data(lines: &[&str]) -> Data {
        Data::new(lines.iter().map(|l| DataItem::new(l).unwrap()).collect()).unwrap()
    }

    #[test]
    fn load_from_path_temp_file_returns_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "1+2=<3>").unwrap();
        writeln!(f, "  2+1=<3>  ").unwrap();
        drop(f);

        let data = load_from_path(&path).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.items()[1].as_str(), "2+1=<3>");
        assert_eq!(data.corpus(), "1+2=<3>\n2+1=<3>\n");
    }

    #[test]
    fn load_from_path_empty_file_returns_empty_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::File::create(&path).unwrap();
        assert!(matches!(load_from_path(&path), Err(DataError::EmptyFile)));
    }

    #[test]
    fn load_from_path_blank_line_returns_empty_data_item_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        std::fs::write(&path, "1+1=<2>\n   \n2+2=<4>\n").unwrap();
        assert!(matches!(load_from_path(&path), Err(DataError::EmptyDataItem)));
    }

    #[test]
    fn load_from_path_missing_file_returns_io_error() {
        let loader = PathLoader::new(Path::new("/nonexistent/trainadd_never_exists.txt"));
        let result = loader.load();
        assert!(matches!(result, Err(DataError::Io(_))));
        assert!(result.unwrap_err().source().is_some());
    }

    #[test]
    fn curriculum_dataset_expands_every_line() {
        let ds = CurriculumDataset::new(
            &data(&["1+2=<3>", "12+34=<46>"]),
            Markers::default(),
            DEFAULT_PAD,
            15,
        )
        .unwrap();
        assert_eq!(ds.len(), 2 + 3);
        assert_eq!(ds.step(0), Some("1+2=<3"));
        assert_eq!(ds.step(4), Some("12+34=<46>"));
        assert_eq!(ds.step(5), None);
    }

    #[test]
    fn curriculum_dataset_items_supervise_last_char() {
        let ds = CurriculumDataset::new(&data(&["9+1=<10>"]), Markers::default(), DEFAULT_PAD, 12)
            .unwrap();
        let tok = ds.tokenizer();
        for (i, item) in ds.iter().enumerate() {
            let item = item.unwrap();
            let text = ds.step(i).unwrap();
            assert_eq!(item.len(), 12);
            let last = text.chars().last().unwrap();
            let (pos, id) = item.supervised().unwrap();
            assert_eq!(pos, text.chars().count() - 2);
            assert_eq!(tok.decode(&[id]).unwrap(), last.to_string());
            assert_eq!(item.targets.iter().filter(|&&t| t != IGNORE_INDEX).count(), 1);
        }
        assert!(tok.encode("\n").is_ok(), "newline is part of the vocab");
    }

    #[test]
    fn curriculum_dataset_rejects_narrow_seq_len() {
        let result = CurriculumDataset::new(
            &data(&["123+456=<579>"]),
            Markers::default(),
            DEFAULT_PAD,
            8,
        );
        assert!(matches!(
            result,
            Err(DataError::Tokenizer(TokenizerError::SeqLenTooShort {
                seq_len: 8,
                required: 12
            }))
        ));
    }

    #[test]
    fn curriculum_dataset_reports_bad_line_number() {
        let result = CurriculumDataset::new(
            &data(&["1+1=<2>", "1+1=2"]),
            Markers::default(),
            DEFAULT_PAD,
            10,
        );
        assert!(matches!(result, Err(DataError::Curriculum { line: 2, .. })));
    }

    #[test]
    fn curriculum_dataset_get_out_of_range() {
        let ds = CurriculumDataset::new(&data(&["1+1=<2>"]), Markers::default(), DEFAULT_PAD, 10)
            .unwrap();
        assert!(matches!(
            ds.get(7),
            Err(DataError::IndexOutOfRange { index: 7, len: 2 })
        ));
    }

    #[test]
    fn data_item_new_rejects_empty() {
        assert!(matches!(DataItem::new("  "), Err(DataError::EmptyDataItem)));
        assert_eq!(DataItem::new(" 1+1=<2> ").unwrap().as_str(), "1+1=<2>");
    }

    #[test]
    fn data_new_rejects_empty_vec() {
        assert!(matches!(Data::new(vec![]), Err(DataError::EmptyFile)));
    }
}

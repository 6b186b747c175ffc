//! Curriculum expansion: one equation record becomes one training text per answer character.
//!
//! `"12+34=<46>"` expands to `"12+34=<4"`, `"12+34=<46"`, `"12+34=<46>"`. Each step ends with the
//! token the model should predict next, so paired with
//! [`Tokenizer::make_causal`](crate::tokenizer::Tokenizer::make_causal) the answer is taught one
//! token at a time.

mod error;

use crate::markers::Markers;

pub use error::CurriculumError;

/// Returns every prefix of `text` that ends inside the answer span.
///
/// The question part runs up to and including the first BOS; the answer part runs from there up
/// to and including the first EOS after it. The result has one entry per answer character, each one
/// character longer than the last, ending with the record through EOS.
///
/// # Errors
///
/// - [`CurriculumError::MissingBos`] when `text` has no BOS marker.
/// - [`CurriculumError::MissingEos`] when no EOS follows the BOS marker.
pub fn expand(text: &str, markers: Markers) -> Result<Vec<String>, CurriculumError> {
    let question_end = text
        .find(markers.bos)
        .map(|pos| pos + markers.bos.len_utf8())
        .ok_or_else(|| CurriculumError::MissingBos {
            bos: markers.bos,
            text: text.to_string(),
        })?;
    let answer_end = text[question_end..]
        .find(markers.eos)
        .map(|pos| question_end + pos + markers.eos.len_utf8())
        .ok_or_else(|| CurriculumError::MissingEos {
            eos: markers.eos,
            text: text.to_string(),
        })?;

    let steps = text[question_end..answer_end]
        .char_indices()
        .map(|(offset, c)| text[..question_end + offset + c.len_utf8()].to_string())
        .collect();
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_single_digit_answer() {
        let steps = expand("1+2=<3>", Markers::default()).unwrap();
        assert_eq!(steps, ["1+2=<3", "1+2=<3>"]);
    }

    #[test]
    fn expand_multi_digit_answer() {
        let steps = expand("12+34=<46>", Markers::default()).unwrap();
        assert_eq!(steps, ["12+34=<4", "12+34=<46", "12+34=<46>"]);
        for pair in steps.windows(2) {
            assert_eq!(pair[1].len(), pair[0].len() + 1);
            assert!(pair[1].starts_with(&pair[0]));
        }
    }

    #[test]
    fn expand_stops_at_first_eos_and_ignores_trailing_text() {
        let steps = expand("5+5=<10>\n", Markers::default()).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.last().map(String::as_str), Some("5+5=<10>"));
    }

    #[test]
    fn expand_with_multibyte_markers() {
        let markers = Markers { bos: '«', eos: '»' };
        let steps = expand("7+8=«15»", markers).unwrap();
        assert_eq!(steps, ["7+8=«1", "7+8=«15", "7+8=«15»"]);
    }

    #[test]
    fn expand_rejects_missing_markers() {
        assert!(matches!(
            expand("1+2=3", Markers::default()),
            Err(CurriculumError::MissingBos { bos: '<', .. })
        ));
        assert!(matches!(
            expand("1+2=<3", Markers::default()),
            Err(CurriculumError::MissingEos { eos: '>', .. })
        ));
        assert!(matches!(
            expand("1+2>=<3", Markers::default()),
            Err(CurriculumError::MissingEos { .. })
        ));
    }
}

//! Invariant checks over a produced chunk sequence.
//!
//! [`verify`] checks a lossless chunk sequence against its source text:
//! chunks must be non-empty, appear in order, and concatenate back to the
//! input. [`verify_atomicity`] checks only the size bound and applies to
//! trimmed output as well.

use thiserror::Error;

use crate::split::split_literal;

/// The first invariant a chunk sequence breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("chunk {index} is empty")]
    Empty { index: usize },

    #[error("chunk {index} does not continue the input at byte {offset}")]
    Mismatch { index: usize, offset: usize },

    #[error("chunks cover {covered} of {len} input bytes")]
    Incomplete { covered: usize, len: usize },

    #[error(
        "chunk {index} has {chars} chars (max {max_chars}) but could still be split on {separator:?}"
    )]
    Splittable {
        index: usize,
        chars: usize,
        max_chars: usize,
        separator: String,
    },
}

/// Check round-trip, order, and size-or-atomicity for lossless output.
pub fn verify<C, S>(text: &str, chunks: &[C], separators: &[S], max_chars: usize) -> Result<(), Violation>
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    let mut offset = 0;
    for (index, chunk) in chunks.iter().enumerate() {
        let chunk = chunk.as_ref();
        if chunk.is_empty() {
            return Err(Violation::Empty { index });
        }
        if !text[offset..].starts_with(chunk) {
            return Err(Violation::Mismatch { index, offset });
        }
        offset += chunk.len();
    }
    if offset != text.len() {
        return Err(Violation::Incomplete {
            covered: offset,
            len: text.len(),
        });
    }
    verify_atomicity(chunks, separators, max_chars)
}

/// Check that every chunk longer than `max_chars` is an atomic unit: no
/// configured separator splits it into more than one piece.
pub fn verify_atomicity<C, S>(chunks: &[C], separators: &[S], max_chars: usize) -> Result<(), Violation>
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    for (index, chunk) in chunks.iter().enumerate() {
        let chunk = chunk.as_ref();
        let chars = chunk.chars().count();
        if chars <= max_chars {
            continue;
        }
        for separator in separators {
            let separator = separator.as_ref();
            if split_literal(chunk, separator).nth(1).is_some() {
                return Err(Violation::Splittable {
                    index,
                    chars,
                    max_chars,
                    separator: separator.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::separators::DEFAULT_SEPARATORS;
    use crate::split::split_text;

    #[test]
    fn test_accepts_splitter_output() {
        let text = "Chapter 1\n\nParagraph 1.\nParagraph 2.\n\nChapter 2\n\nParagraph 3.";
        let chunks = split_text(text, DEFAULT_SEPARATORS, 20);
        assert_eq!(verify(text, &chunks, DEFAULT_SEPARATORS, 20), Ok(()));
    }

    #[test]
    fn test_detects_lost_text() {
        let text = "Hello world";
        assert_eq!(
            verify(text, &["Hello "], DEFAULT_SEPARATORS, 20),
            Err(Violation::Incomplete { covered: 6, len: 11 })
        );
        assert_eq!(
            verify(text, &["Hello", "world"], DEFAULT_SEPARATORS, 20),
            Err(Violation::Mismatch { index: 1, offset: 5 })
        );
    }

    #[test]
    fn test_detects_empty_chunk() {
        assert_eq!(
            verify("ab", &["a", "", "b"], DEFAULT_SEPARATORS, 20),
            Err(Violation::Empty { index: 1 })
        );
    }

    #[test]
    fn test_detects_splittable_oversized_chunk() {
        let text = "Hello world";
        let err = verify(text, &[text], DEFAULT_SEPARATORS, 5).unwrap_err();
        assert_eq!(
            err,
            Violation::Splittable {
                index: 0,
                chars: 11,
                max_chars: 5,
                separator: " ".to_string(),
            }
        );
    }

    #[test]
    fn test_trailing_separator_is_atomic() {
        assert_eq!(verify_atomicity(&["abcdefgh "], DEFAULT_SEPARATORS, 3), Ok(()));
    }
}

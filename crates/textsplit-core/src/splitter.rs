//! Validated splitter configuration and the chunk type handed to callers.
//!
//! [`TextSplitter`] checks the preconditions of the splitting routine once,
//! at construction, so [`TextSplitter::split`] never fails.
//!
//! # Trim policy
//!
//! The split itself is always lossless. [`TrimPolicy`] decides what the
//! caller receives:
//!
//! - [`TrimPolicy::Preserve`] returns chunks verbatim. Concatenating them
//!   reproduces the input exactly.
//! - [`TrimPolicy::Trim`] strips surrounding whitespace from each chunk and
//!   drops chunks that end up empty. Offsets still point into the input,
//!   but the gaps between chunks are lost.
//!
//! # Example
//!
//! ```rust
//! use textsplit_core::{TextSplitter, TrimPolicy};
//!
//! let splitter = TextSplitter::new(12).unwrap().with_trim(TrimPolicy::Trim);
//! let texts: Vec<String> = splitter
//!     .split("Hello\n\nWorld\nHow are you?")
//!     .into_iter()
//!     .map(|c| c.text)
//!     .collect();
//! assert_eq!(texts, vec!["Hello", "World", "How are you?"]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::SplitterError;
use crate::separators::{Preset, DEFAULT_SEPARATORS};
use crate::split::split_spans;

/// What to do with whitespace around each chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimPolicy {
    #[default]
    Preserve,
    Trim,
}

/// One chunk of the input, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Position in the output sequence, contiguous from 0.
    pub index: usize,
    pub text: String,
    /// Byte offset of `text` in the input.
    pub start: usize,
    /// Byte offset one past the end of `text` in the input.
    pub end: usize,
    pub char_count: usize,
    /// The chunk is an atomic unit longer than the configured maximum.
    pub oversized: bool,
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// A splitter with a checked size bound and separator list.
#[derive(Debug, Clone)]
pub struct TextSplitter {
    max_chars: usize,
    separators: Vec<String>,
    trim: TrimPolicy,
}

impl TextSplitter {
    /// Create a splitter using [`DEFAULT_SEPARATORS`] and
    /// [`TrimPolicy::Preserve`].
    pub fn new(max_chars: usize) -> Result<Self, SplitterError> {
        if max_chars == 0 {
            return Err(SplitterError::ZeroMaxChars);
        }
        Ok(Self {
            max_chars,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            trim: TrimPolicy::default(),
        })
    }

    /// Replace the separator list. Order is priority, coarsest first.
    ///
    /// An empty list is accepted: every input then becomes a single chunk.
    pub fn with_separators<I, S>(mut self, separators: I) -> Result<Self, SplitterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let separators: Vec<String> = separators.into_iter().map(Into::into).collect();
        validate_separators(&separators)?;
        self.separators = separators;
        Ok(self)
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.separators = preset.separators().iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_trim(mut self, trim: TrimPolicy) -> Self {
        self.trim = trim;
        self
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    pub fn trim(&self) -> TrimPolicy {
        self.trim
    }

    /// Split `text` into chunks as slices of the input.
    pub fn split_str<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pieces(text).into_iter().map(|(_, piece)| piece).collect()
    }

    /// Split `text` into owned [`Chunk`]s carrying offsets and sizes.
    pub fn split(&self, text: &str) -> Vec<Chunk> {
        self.pieces(text)
            .into_iter()
            .enumerate()
            .map(|(index, (start, piece))| {
                let char_count = piece.chars().count();
                Chunk {
                    index,
                    text: piece.to_string(),
                    start,
                    end: start + piece.len(),
                    char_count,
                    oversized: char_count > self.max_chars,
                }
            })
            .collect()
    }

    /// Spans after the trim policy, as (byte offset, slice) pairs.
    fn pieces<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
        let spans = split_spans(text, &self.separators, self.max_chars);
        match self.trim {
            TrimPolicy::Preserve => spans
                .into_iter()
                .map(|span| (span.start, span.slice(text)))
                .collect(),
            TrimPolicy::Trim => spans
                .into_iter()
                .filter_map(|span| {
                    let raw = span.slice(text);
                    let trimmed = raw.trim();
                    if trimmed.is_empty() {
                        return None;
                    }
                    let leading = raw.len() - raw.trim_start().len();
                    Some((span.start + leading, trimmed))
                })
                .collect(),
        }
    }
}

/// Separators must be non-empty and distinct.
fn validate_separators(separators: &[String]) -> Result<(), SplitterError> {
    let mut seen = HashSet::new();
    for (index, sep) in separators.iter().enumerate() {
        if sep.is_empty() {
            return Err(SplitterError::EmptySeparator { index });
        }
        if !seen.insert(sep.as_str()) {
            return Err(SplitterError::DuplicateSeparator {
                separator: sep.clone(),
            });
        }
    }
    Ok(())
}

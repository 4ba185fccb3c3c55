use thiserror::Error;

/// Invalid splitter configuration.
///
/// The splitter itself is total over all inputs; these errors are only
/// produced when building a [`TextSplitter`](crate::TextSplitter) or
/// parsing a [`Preset`](crate::Preset) name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitterError {
    #[error("invalid configuration: max_chars must be > 0")]
    ZeroMaxChars,

    #[error("invalid configuration: separator #{index} is empty")]
    EmptySeparator { index: usize },

    #[error("invalid configuration: separator {separator:?} is listed more than once")]
    DuplicateSeparator { separator: String },

    #[error("invalid configuration: unknown preset '{0}' (expected one of: prose, punctuation)")]
    UnknownPreset(String),
}

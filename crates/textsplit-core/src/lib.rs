//! # textsplit core
//!
//! Pure, I/O-free logic for textsplit: the recursive separator splitter,
//! separator presets, the validated [`TextSplitter`] with its trim policy,
//! and invariant checks over produced chunks.
//!
//! This crate contains no logging, filesystem, or async dependencies. It
//! is safe to call from any number of threads on independent inputs.
//!
//! ```rust
//! use textsplit_core::{split_text, DEFAULT_SEPARATORS};
//!
//! let chunks = split_text("Hello\n\nWorld\nHow are you?", DEFAULT_SEPARATORS, 12);
//! assert_eq!(chunks, vec!["Hello\n\n", "World\n", "How are you?"]);
//! ```

pub mod error;
pub mod separators;
pub mod split;
pub mod splitter;
pub mod verify;

pub use error::SplitterError;
pub use separators::{Preset, DEFAULT_SEPARATORS, PUNCTUATION_SEPARATORS};
pub use split::{split_literal, split_spans, split_text, Span};
pub use splitter::{Chunk, TextSplitter, TrimPolicy};
pub use verify::{verify, verify_atomicity, Violation};

//! Built-in separator lists.
//!
//! A separator list is ordered from coarsest to finest. The splitter tries
//! the first entry before falling back to later ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SplitterError;

/// Paragraph break, line break, sentence end, word.
pub const DEFAULT_SEPARATORS: &[&str] = &["\n\n", "\n", ". ", " "];

/// Like [`DEFAULT_SEPARATORS`] but also breaks after `!`, `?`, `;` and `,`
/// before falling back to single spaces. Suits lists and dialogue.
pub const PUNCTUATION_SEPARATORS: &[&str] = &["\n\n", "\n", ". ", "! ", "? ", "; ", ", ", " "];

/// A named separator list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Prose,
    Punctuation,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[Preset::Prose, Preset::Punctuation]
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Prose => "prose",
            Preset::Punctuation => "punctuation",
        }
    }

    pub fn separators(self) -> &'static [&'static str] {
        match self {
            Preset::Prose => DEFAULT_SEPARATORS,
            Preset::Punctuation => PUNCTUATION_SEPARATORS,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SplitterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SplitterError::UnknownPreset(s.to_string()))
    }
}

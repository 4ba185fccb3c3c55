//! Where the text to split comes from.
//!
//! Precedence: the positional argument, then `--file`, then stdin.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (text, file) {
            (Some(_), Some(_)) => bail!("Pass either TEXT or --file, not both"),
            (Some(text), None) => Ok(InputSource::Inline(text)),
            (None, Some(path)) => Ok(InputSource::File(path)),
            (None, None) => Ok(InputSource::Stdin),
        }
    }

    /// Short label for logs and the export manifest.
    pub fn describe(&self) -> String {
        match self {
            InputSource::Inline(_) => "argument".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }

    pub fn read(&self) -> Result<String> {
        let text = match self {
            InputSource::Inline(text) => text.clone(),
            InputSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?,
            InputSource::Stdin => {
                if atty::is(atty::Stream::Stdin) {
                    eprintln!("Reading text from stdin (end with Ctrl-D)...");
                }
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read text from stdin")?;
                buf
            }
        };
        debug!(source = %self.describe(), bytes = text.len(), "read input");
        Ok(text)
    }
}

//! `tsplit` subcommand implementations.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use textsplit_core::{verify, verify_atomicity, Chunk, Preset, TextSplitter, TrimPolicy};
use tracing::info;

use crate::config::Config;
use crate::export::DirectorySink;
use crate::input::InputSource;
use crate::output::WriterSink;
use crate::progress::ChunkProgressReporter;
use crate::sink::{feed_chunks, run_pipeline};
use crate::stats::StatsSink;

/// Split the input and print the chunks in the configured format.
pub fn run_split(
    config: &Config,
    splitter: &TextSplitter,
    source: &InputSource,
    check: bool,
    progress: &dyn ChunkProgressReporter,
) -> Result<()> {
    let text = source.read()?;
    let chunks = splitter.split(&text);
    if check {
        check_invariants(&text, splitter, &chunks)?;
    }
    let sink = WriterSink::stdout(config.output.format, &config.output.delimiter);
    feed_chunks(&chunks, splitter.max_chars(), sink, progress)?;
    Ok(())
}

/// Split the input into numbered files under `out_dir`.
pub fn run_export(
    splitter: &TextSplitter,
    source: &InputSource,
    out_dir: &Path,
    force: bool,
    progress: &dyn ChunkProgressReporter,
) -> Result<()> {
    let text = source.read()?;
    let sink = DirectorySink::create(out_dir, splitter, &source.describe(), force)?;
    let report = run_pipeline(splitter, &text, sink, progress)?;
    println!("Exported {} chunks to {}", report.chunks, out_dir.display());
    Ok(())
}

/// Print size statistics for the input under the current settings.
pub fn run_stats(
    splitter: &TextSplitter,
    source: &InputSource,
    json: bool,
    progress: &dyn ChunkProgressReporter,
) -> Result<()> {
    let text = source.read()?;
    let sink = StatsSink::new(std::io::stdout(), splitter.max_chars(), json);
    run_pipeline(splitter, &text, sink, progress)?;
    Ok(())
}

/// List the built-in separator presets.
pub fn list_presets() -> Result<()> {
    let mut out = std::io::stdout().lock();
    for preset in Preset::all() {
        let seps: Vec<String> = preset
            .separators()
            .iter()
            .map(|s| format!("{:?}", s))
            .collect();
        let marker = if *preset == Preset::default() { " (default)" } else { "" };
        writeln!(out, "{}{}: {}", preset, marker, seps.join(" "))?;
    }
    Ok(())
}

/// Check the invariants `chunks` must satisfy as the split of `text`.
/// Trimmed output can only be checked for the size bound.
pub fn check_invariants(text: &str, splitter: &TextSplitter, chunks: &[Chunk]) -> Result<()> {
    let separators = splitter.separators();
    let max_chars = splitter.max_chars();
    let checked = match splitter.trim() {
        TrimPolicy::Preserve => verify(text, chunks, separators, max_chars),
        TrimPolicy::Trim => verify_atomicity(chunks, separators, max_chars),
    };
    checked.context("Chunk invariant check failed")?;
    info!("Invariant check passed for {} chunks", chunks.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_invariants_both_policies() {
        let text = "Chapter 1\n\nParagraph 1.\nParagraph 2.\n\nChapter 2\n\nParagraph 3.";
        let splitter = TextSplitter::new(20).unwrap();
        check_invariants(text, &splitter, &splitter.split(text)).unwrap();
        let trimmed = splitter.with_trim(TrimPolicy::Trim);
        check_invariants(text, &trimmed, &trimmed.split(text)).unwrap();
    }

    #[test]
    fn test_check_invariants_rejects_bad_chunks() {
        let text = "Hello world";
        let splitter = TextSplitter::new(6).unwrap();
        let mut chunks = splitter.split(text);
        chunks.pop();
        let err = check_invariants(text, &splitter, &chunks).unwrap_err();
        assert_eq!(err.to_string(), "Chunk invariant check failed");
    }
}

//! Per-chunk consumers and the pipeline that feeds them.
//!
//! A [`ChunkSink`] turns one chunk into some downstream artifact: a line on
//! stdout, a file on disk, a request to a speech API. The pipeline splits
//! the input once and hands chunks to the sink strictly in order, so the
//! artifacts can be sequenced the same way.
//!
//! ```text
//!   text ──▶ TextSplitter ──▶ chunk 0, chunk 1, … ──▶ ChunkSink::accept
//!                                                     ChunkSink::finish
//! ```
//!
//! Sink failures are opaque: the pipeline attaches the chunk index and
//! stops at the first error. Retrying is the sink's business.

use anyhow::{Context, Result};
use textsplit_core::{Chunk, TextSplitter};
use tracing::{debug, info, warn};

use crate::progress::{ChunkProgressEvent, ChunkProgressReporter};

/// Consumer of chunks, called once per chunk in output order.
pub trait ChunkSink {
    /// Produce the artifact for `chunk`. `total` is the number of chunks
    /// in this run.
    fn accept(&mut self, chunk: &Chunk, total: usize) -> Result<()>;

    /// Called once after the last chunk, including when there were none.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: ChunkSink + ?Sized> ChunkSink for &mut S {
    fn accept(&mut self, chunk: &Chunk, total: usize) -> Result<()> {
        (**self).accept(chunk, total)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Keeps every chunk in memory.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub chunks: Vec<Chunk>,
}

impl ChunkSink for CollectSink {
    fn accept(&mut self, chunk: &Chunk, _total: usize) -> Result<()> {
        self.chunks.push(chunk.clone());
        Ok(())
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineReport {
    pub chunks: usize,
    pub oversized: usize,
    pub chars: usize,
}

/// Split `text` and feed every chunk to `sink` in order.
pub fn run_pipeline<S: ChunkSink>(
    splitter: &TextSplitter,
    text: &str,
    sink: S,
    progress: &dyn ChunkProgressReporter,
) -> Result<PipelineReport> {
    let chunks = splitter.split(text);
    feed_chunks(&chunks, splitter.max_chars(), sink, progress)
}

/// Feed chunks that were already split to `sink` in order.
pub fn feed_chunks<S: ChunkSink>(
    chunks: &[Chunk],
    max_chars: usize,
    mut sink: S,
    progress: &dyn ChunkProgressReporter,
) -> Result<PipelineReport> {
    let total = chunks.len();

    if total > 1 {
        info!("Splitting text into {} chunks", total);
    }
    progress.report(ChunkProgressEvent::Split {
        total: total as u64,
    });

    let mut report = PipelineReport {
        chunks: total,
        oversized: 0,
        chars: 0,
    };

    for chunk in chunks {
        if chunk.oversized {
            report.oversized += 1;
            warn!(
                "Chunk {} is {} chars, over the {} limit, and has no separator left to split on",
                chunk.index,
                chunk.char_count,
                max_chars
            );
        }
        debug!(
            index = chunk.index,
            start = chunk.start,
            chars = chunk.char_count,
            "chunk"
        );

        sink.accept(chunk, total)
            .with_context(|| format!("Failed to process chunk {} of {}", chunk.index + 1, total))?;
        report.chars += chunk.char_count;

        progress.report(ChunkProgressEvent::Processed {
            n: chunk.index as u64 + 1,
            total: total as u64,
        });
    }

    sink.finish().context("Failed to finish chunk output")?;
    Ok(report)
}

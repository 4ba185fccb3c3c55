//! Chunk size statistics.
//!
//! Gives a quick view of how an input splits under the current settings:
//! how many chunks, how full they are, and whether any atomic unit
//! overflowed the limit. Used by `tsplit stats`.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use textsplit_core::Chunk;

use crate::sink::ChunkSink;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChunkStats {
    pub chunks: usize,
    pub max_chars: usize,
    pub total_chars: usize,
    pub smallest: usize,
    pub largest: usize,
    pub mean: f64,
    /// Chunks longer than `max_chars`.
    pub oversized: usize,
}

impl ChunkStats {
    pub fn new(max_chars: usize) -> Self {
        Self {
            chunks: 0,
            max_chars,
            total_chars: 0,
            smallest: 0,
            largest: 0,
            mean: 0.0,
            oversized: 0,
        }
    }

    pub fn add(&mut self, chunk: &Chunk) {
        let n = chunk.char_count;
        self.smallest = if self.chunks == 0 { n } else { self.smallest.min(n) };
        self.largest = self.largest.max(n);
        self.chunks += 1;
        self.total_chars += n;
        self.mean = self.total_chars as f64 / self.chunks as f64;
        if chunk.oversized {
            self.oversized += 1;
        }
    }

    pub fn from_chunks(chunks: &[Chunk], max_chars: usize) -> Self {
        let mut stats = Self::new(max_chars);
        for chunk in chunks {
            stats.add(chunk);
        }
        stats
    }

    /// Average fill of the size bound, as a percentage.
    pub fn fill_percent(&self) -> f64 {
        if self.chunks == 0 {
            return 0.0;
        }
        100.0 * self.mean / self.max_chars as f64
    }

    pub fn write_human<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "textsplit: Chunk Stats")?;
        writeln!(out, "======================")?;
        writeln!(out)?;
        writeln!(out, "  Limit:       {} chars", self.max_chars)?;
        writeln!(out, "  Chunks:      {}", self.chunks)?;
        writeln!(out, "  Total:       {} chars", self.total_chars)?;
        writeln!(out, "  Smallest:    {} chars", self.smallest)?;
        writeln!(out, "  Largest:     {} chars", self.largest)?;
        writeln!(out, "  Mean:        {:.1} chars ({:.0}% of limit)", self.mean, self.fill_percent())?;
        writeln!(out, "  Oversized:   {}", self.oversized)?;
        Ok(())
    }
}

/// Accumulates [`ChunkStats`] and prints them on finish.
pub struct StatsSink<W: Write> {
    stats: ChunkStats,
    json: bool,
    out: W,
}

impl<W: Write> StatsSink<W> {
    pub fn new(out: W, max_chars: usize, json: bool) -> Self {
        Self {
            stats: ChunkStats::new(max_chars),
            json,
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChunkSink for StatsSink<W> {
    fn accept(&mut self, chunk: &Chunk, _total: usize) -> Result<()> {
        self.stats.add(chunk);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut self.out, &self.stats)?;
            writeln!(self.out)?;
        } else {
            self.stats.write_human(&mut self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textsplit_core::TextSplitter;

    #[test]
    fn test_stats_from_chunks() {
        let chunks = TextSplitter::new(5).unwrap().split("aaaa bbbbbbbbbbbb cc");
        let stats = ChunkStats::from_chunks(&chunks, 5);
        assert_eq!(stats.chunks, 3);
        assert_eq!(stats.total_chars, 20);
        assert_eq!(stats.smallest, 2);
        assert_eq!(stats.largest, 13);
        assert_eq!(stats.oversized, 1);
        assert!((stats.mean - 20.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stats() {
        let stats = ChunkStats::from_chunks(&[], 10);
        assert_eq!(stats.chunks, 0);
        assert_eq!(stats.smallest, 0);
        assert_eq!(stats.fill_percent(), 0.0);
    }

    #[test]
    fn test_sink_writes_json() {
        let chunks = TextSplitter::new(12).unwrap().split("Hello\n\nWorld\nHow are you?");
        let mut sink = StatsSink::new(Vec::new(), 12, true);
        for c in &chunks {
            sink.accept(c, chunks.len()).unwrap();
        }
        sink.finish().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(value["chunks"], 3);
        assert_eq!(value["largest"], 12);
    }
}

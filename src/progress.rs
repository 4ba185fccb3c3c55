//! Chunk pipeline progress reporting.
//!
//! Reports how many chunks have been handed to the downstream sink so
//! users see how far a long run has got. Progress goes to **stderr** so
//! stdout stays parseable for scripts.

use std::io::Write;

/// A single progress event for the chunk pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChunkProgressEvent {
    /// The input has been split; `total` chunks will follow.
    Split { total: u64 },
    /// `n` of `total` chunks have been accepted by the sink.
    Processed { n: u64, total: u64 },
}

/// Reports pipeline progress. Implementations write to stderr (human or JSON).
pub trait ChunkProgressReporter: Send + Sync {
    /// Emit a progress event. Called from the pipeline.
    fn report(&self, event: ChunkProgressEvent);
}

/// Human-friendly progress on stderr: "chunks  1,234 / 5,000".
pub struct StderrProgress;

impl ChunkProgressReporter for StderrProgress {
    fn report(&self, event: ChunkProgressEvent) {
        let line = match &event {
            ChunkProgressEvent::Split { total } => {
                format!("split  {} chunks\n", format_number(*total))
            }
            ChunkProgressEvent::Processed { n, total } => {
                format!("chunks  {} / {}\n", format_number(*n), format_number(*total))
            }
        };
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
        let _ = stderr.flush();
    }
}

/// Machine-readable progress: one JSON object per line on stderr.
pub struct JsonProgress;

impl ChunkProgressReporter for JsonProgress {
    fn report(&self, event: ChunkProgressEvent) {
        let obj = match &event {
            ChunkProgressEvent::Split { total } => serde_json::json!({
                "event": "progress",
                "phase": "split",
                "total": total
            }),
            ChunkProgressEvent::Processed { n, total } => serde_json::json!({
                "event": "progress",
                "phase": "processing",
                "n": n,
                "total": total
            }),
        };
        if let Ok(line) = serde_json::to_string(&obj) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "{}", line);
            let _ = stderr.flush();
        }
    }
}

/// No-op reporter when progress is disabled.
pub struct NoProgress;

impl ChunkProgressReporter for NoProgress {
    fn report(&self, _event: ChunkProgressEvent) {}
}

fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + (s.len() - 1) / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Progress mode for the CLI: off, human (stderr), or JSON (stderr).
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ProgressMode {
    Off,
    Human,
    Json,
}

impl ProgressMode {
    /// Default: human progress when stderr is a TTY, otherwise off.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stderr) {
            ProgressMode::Human
        } else {
            ProgressMode::Off
        }
    }

    /// Build a reporter for this mode.
    pub fn reporter(&self) -> Box<dyn ChunkProgressReporter> {
        match self {
            ProgressMode::Off => Box::new(NoProgress),
            ProgressMode::Human => Box::new(StderrProgress),
            ProgressMode::Json => Box::new(JsonProgress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_comma() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1), "1");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }
}

//! Export chunks as numbered text files plus a JSON manifest.
//!
//! Produces `chunk-0001.txt`, `chunk-0002.txt`, … and a `manifest.json`
//! listing them in output order with offsets and SHA-256 hashes, so a
//! downstream step can process the files one by one and sequence its
//! results the same way.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use textsplit_core::{Chunk, TextSplitter, TrimPolicy};
use tracing::info;

use crate::models::ChunkRecord;
use crate::sink::ChunkSink;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Serialize)]
struct Manifest<'a> {
    created_at: String,
    source: &'a str,
    max_chars: usize,
    separators: &'a [String],
    trim: TrimPolicy,
    chunk_count: usize,
    chunks: &'a [ManifestEntry],
}

#[derive(Serialize)]
struct ManifestEntry {
    file: String,
    #[serde(flatten)]
    record: ChunkRecord,
}

pub struct DirectorySink {
    dir: PathBuf,
    source: String,
    max_chars: usize,
    separators: Vec<String>,
    trim: TrimPolicy,
    entries: Vec<ManifestEntry>,
}

impl DirectorySink {
    /// Prepare `dir` for export. Refuses a path that is a file, and a
    /// directory that already holds a manifest unless `force` is set.
    pub fn create(dir: &Path, splitter: &TextSplitter, source: &str, force: bool) -> Result<Self> {
        if dir.is_file() {
            bail!("Output path {} is a file, expected a directory", dir.display());
        }
        if dir.join(MANIFEST_FILE).exists() && !force {
            bail!(
                "{} already contains {}; pass --force to overwrite",
                dir.display(),
                MANIFEST_FILE
            );
        }
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        if force {
            remove_previous_export(dir)?;
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            source: source.to_string(),
            max_chars: splitter.max_chars(),
            separators: splitter.separators().to_vec(),
            trim: splitter.trim(),
            entries: Vec::new(),
        })
    }
}

/// Delete chunk files and the manifest left by an earlier export, so the
/// directory only ever holds the files the new manifest lists.
fn remove_previous_export(dir: &Path) -> Result<()> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read output directory: {}", dir.display()))?;
    let mut removed = 0;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name == MANIFEST_FILE || is_chunk_file_name(name) {
            let path = entry.path();
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            removed += 1;
        }
    }
    if removed > 0 {
        info!("Removed {} files from a previous export in {}", removed, dir.display());
    }
    Ok(())
}

fn is_chunk_file_name(name: &str) -> bool {
    name.strip_prefix("chunk-")
        .and_then(|rest| rest.strip_suffix(".txt"))
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// `chunk-0001.txt`; the number is 1-based and padded to fit `total`.
pub fn chunk_file_name(index: usize, total: usize) -> String {
    let width = total.to_string().len().max(4);
    format!("chunk-{:0width$}.txt", index + 1, width = width)
}

impl ChunkSink for DirectorySink {
    fn accept(&mut self, chunk: &Chunk, total: usize) -> Result<()> {
        let file = chunk_file_name(chunk.index, total);
        let path = self.dir.join(&file);
        std::fs::write(&path, &chunk.text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        self.entries.push(ManifestEntry {
            file,
            record: ChunkRecord::without_text(chunk),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let manifest = Manifest {
            created_at: Utc::now().to_rfc3339(),
            source: &self.source,
            max_chars: self.max_chars,
            separators: &self.separators,
            trim: self.trim,
            chunk_count: self.entries.len(),
            chunks: &self.entries,
        };
        let json = serde_json::to_string_pretty(&manifest)?;
        let path = self.dir.join(MANIFEST_FILE);
        std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

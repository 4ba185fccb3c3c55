//! Serializable chunk records shared by the stdout and export sinks.

use serde::Serialize;
use sha2::{Digest, Sha256};
use textsplit_core::Chunk;

/// A chunk as written to JSON output and the export manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkRecord {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub char_count: usize,
    pub oversized: bool,
    /// SHA-256 of the chunk text, hex encoded.
    pub sha256: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ChunkRecord {
    pub fn with_text(chunk: &Chunk) -> Self {
        Self {
            text: Some(chunk.text.clone()),
            ..Self::without_text(chunk)
        }
    }

    pub fn without_text(chunk: &Chunk) -> Self {
        Self {
            index: chunk.index,
            start: chunk.start,
            end: chunk.end,
            char_count: chunk.char_count,
            oversized: chunk.oversized,
            sha256: hash_text(&chunk.text),
            text: None,
        }
    }
}

pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use textsplit_core::TextSplitter;

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(
            hash_text("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_record_fields() {
        let chunks = TextSplitter::new(6).unwrap().split("Hello world");
        let record = ChunkRecord::with_text(&chunks[1]);
        assert_eq!(record.index, 1);
        assert_eq!(record.start, 6);
        assert_eq!(record.end, 11);
        assert_eq!(record.text.as_deref(), Some("world"));
        assert_eq!(record.sha256, hash_text("world"));

        let json = serde_json::to_value(ChunkRecord::without_text(&chunks[0])).unwrap();
        assert!(json.get("text").is_none());
        assert_eq!(json["char_count"], 6);
    }
}

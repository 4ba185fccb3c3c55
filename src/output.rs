//! Stream chunks to a writer (normally stdout) in one of the output formats.

use anyhow::Result;
use std::io::Write;
use textsplit_core::Chunk;

use crate::config::OutputFormat;
use crate::models::ChunkRecord;
use crate::sink::ChunkSink;

pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
    delimiter: String,
    /// Buffered records for [`OutputFormat::Json`], written on finish.
    records: Vec<ChunkRecord>,
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout(format: OutputFormat, delimiter: &str) -> Self {
        Self::new(std::io::stdout(), format, delimiter)
    }
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat, delimiter: &str) -> Self {
        Self {
            writer,
            format,
            delimiter: delimiter.to_string(),
            records: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ChunkSink for WriterSink<W> {
    fn accept(&mut self, chunk: &Chunk, _total: usize) -> Result<()> {
        match self.format {
            OutputFormat::Plain => {
                if chunk.index > 0 {
                    self.writer.write_all(self.delimiter.as_bytes())?;
                }
                self.writer.write_all(chunk.text.as_bytes())?;
            }
            OutputFormat::Jsonl => {
                serde_json::to_writer(&mut self.writer, &ChunkRecord::with_text(chunk))?;
                self.writer.write_all(b"\n")?;
            }
            OutputFormat::Json => self.records.push(ChunkRecord::with_text(chunk)),
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;
    use crate::sink::run_pipeline;
    use textsplit_core::TextSplitter;

    fn render(format: OutputFormat, text: &str, max_chars: usize) -> String {
        let splitter = TextSplitter::new(max_chars).unwrap();
        let mut sink = WriterSink::new(Vec::new(), format, "|");
        run_pipeline(&splitter, text, &mut sink, &NoProgress).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_uses_delimiter_between_chunks() {
        assert_eq!(
            render(OutputFormat::Plain, "apple banana cherry", 7),
            "apple |banana |cherry"
        );
    }

    #[test]
    fn test_jsonl_one_record_per_line() {
        let out = render(OutputFormat::Jsonl, "Hello\n\nWorld\nHow are you?", 12);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["index"], 0);
        assert_eq!(first["text"], "Hello\n\n");
        let last: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(last["text"], "How are you?");
        assert_eq!(last["start"], 13);
    }

    #[test]
    fn test_json_is_single_array() {
        let out = render(OutputFormat::Json, "apple,banana", 100);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["char_count"], 12);
    }

    #[test]
    fn test_json_empty_input_is_empty_array() {
        let out = render(OutputFormat::Json, "", 10);
        assert_eq!(out.trim(), "[]");
    }
}

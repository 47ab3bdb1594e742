//! JSON output formatter

use std::io::Write;

use anyhow::Result;
use kugiri_api::SegmentData;
use serde::Serialize;

use super::OutputFormatter;

/// JSON formatter - outputs an array with one entry per source
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sources: Vec<SourceSegments>,
}

/// Segments of one input source
#[derive(Debug, Serialize)]
pub struct SourceSegments {
    /// Source name
    pub source: String,
    /// Segment records in offset order
    pub segments: Vec<SegmentData>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            sources: Vec::new(),
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        self.sources.push(SourceSegments {
            source: name.to_string(),
            segments: Vec::new(),
        });
        Ok(())
    }

    fn format_segment(&mut self, segment: &SegmentData) -> Result<()> {
        if self.sources.is_empty() {
            self.begin_source("")?;
        }
        if let Some(current) = self.sources.last_mut() {
            current.segments.push(segment.clone());
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sources)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sources)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

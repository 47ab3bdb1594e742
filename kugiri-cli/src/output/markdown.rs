//! Markdown output formatter

use std::io::Write;

use anyhow::Result;
use kugiri_api::SegmentData;

use super::OutputFormatter;

/// Markdown formatter - outputs segments as a numbered list per source
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    source_count: usize,
    segment_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            source_count: 0,
            segment_count: 0,
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        if self.source_count > 0 {
            writeln!(self.writer)?;
        }
        self.source_count += 1;
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_segment(&mut self, segment: &SegmentData) -> Result<()> {
        let text = segment.segment.trim();
        if text.is_empty() {
            return Ok(());
        }
        self.segment_count += 1;
        match segment.is_word_like {
            Some(false) => writeln!(self.writer, "{}. `{}`", self.segment_count, text)?,
            _ => writeln!(self.writer, "{}. {}", self.segment_count, text)?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

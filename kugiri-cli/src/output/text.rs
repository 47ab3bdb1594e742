//! Plain text output formatter

use std::io::Write;

use anyhow::Result;
use kugiri_api::SegmentData;

use super::OutputFormatter;

/// Plain text formatter - outputs one segment per line
///
/// Segments are trimmed and whitespace-only segments are skipped.
pub struct TextFormatter<W: Write> {
    writer: W,
    sources: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, sources: 0 }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn begin_source(&mut self, _name: &str) -> Result<()> {
        if self.sources > 0 {
            writeln!(self.writer)?;
        }
        self.sources += 1;
        Ok(())
    }

    fn format_segment(&mut self, segment: &SegmentData) -> Result<()> {
        let text = segment.segment.trim();
        if !text.is_empty() {
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(segment: &str, index: usize) -> SegmentData {
        SegmentData {
            segment: segment.to_string(),
            index,
            input: None,
            is_word_like: None,
        }
    }

    #[test]
    fn test_one_segment_per_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.begin_source("a").unwrap();
        formatter.format_segment(&data("Hello there. ", 0)).unwrap();
        formatter.format_segment(&data(" ", 13)).unwrap();
        formatter.format_segment(&data("Bye.", 14)).unwrap();
        formatter.begin_source("b").unwrap();
        formatter.format_segment(&data("Next.", 0)).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "Hello there.\nBye.\n\nNext.\n");
    }
}

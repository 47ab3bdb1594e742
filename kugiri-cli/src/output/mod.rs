//! Output formatting module

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use kugiri_api::SegmentData;

use crate::error::CliError;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Start the segments of one input source
    fn begin_source(&mut self, name: &str) -> Result<()>;

    /// Format and output a single segment
    fn format_segment(&mut self, segment: &SegmentData) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one segment per line
    Text,
    /// JSON array of segment records per source
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from a config file
    pub fn from_name(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format {name:?}")).into()
        })
    }

    /// Create the formatter for this format
    pub fn create_formatter<W: Write + Send + 'static>(
        self,
        writer: W,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_name() {
        assert_eq!(OutputFormat::from_name("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("Markdown").unwrap(), OutputFormat::Markdown);
        assert!(OutputFormat::from_name("yaml").is_err());
    }
}

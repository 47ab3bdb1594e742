//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use kugiri_api::{Granularity, LocaleRegistry};

use crate::output::OutputFormat;

pub mod generate_config;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text files into graphemes, words or sentences
    Segment(segment::SegmentArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a locale configuration file
    Validate(validate::ValidateArgs),

    /// Generate a locale configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List built-in locales
    Locales,

    /// List segmentation granularities
    Granularities,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Output lines of the listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Locales => {
                let registry = LocaleRegistry::builtin();
                let mut lines = vec!["Built-in locales:".to_string()];
                for tag in registry.available_locales() {
                    let name = registry
                        .entry(tag)
                        .map(|entry| entry.data().metadata.name.clone())
                        .unwrap_or_default();
                    lines.push(format!("  {tag:<6} {name}"));
                }
                lines
            }
            ListCommands::Granularities => {
                let mut lines = vec!["Granularities:".to_string()];
                lines.extend(Granularity::ALL.iter().map(|g| format!("  {g}")));
                lines
            }
            ListCommands::Formats => {
                let mut lines = vec!["Output formats:".to_string()];
                lines.extend(OutputFormat::value_variants().iter().filter_map(|format| {
                    let value = format.to_possible_value()?;
                    let help = value.get_help().map(ToString::to_string).unwrap_or_default();
                    Some(format!("  {:<9} {help}", value.get_name()))
                }));
                lines
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_locales() {
        let lines = ListCommands::Locales.lines();
        assert_eq!(lines[0], "Built-in locales:");
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().any(|line| line.contains("ja") && line.contains("日本語")));
    }

    #[test]
    fn test_list_granularities() {
        assert_eq!(
            ListCommands::Granularities.lines(),
            vec!["Granularities:", "  grapheme", "  word", "  sentence"]
        );
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].trim_start().starts_with("text"));
        assert!(lines[2].trim_start().starts_with("json"));
        assert!(lines[3].trim_start().starts_with("markdown"));
    }
}

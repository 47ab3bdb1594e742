//! kugiri command-line entry point

use anyhow::Result;
use clap::Parser;
use kugiri_cli::commands::Commands;

/// Unicode text segmentation: graphemes, words and sentences
#[derive(Debug, Parser)]
#[command(name = "kugiri", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_segment_command() {
        let cli = Cli::try_parse_from(["kugiri", "segment", "-i", "a.txt", "-g", "word"]).unwrap();
        assert!(matches!(cli.command, Commands::Segment(_)));
    }
}

//! Generate config command implementation

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use kugiri_api::locale::canonicalize_tag;
use kugiri_api::LocaleData;

use crate::error::CliError;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Locale code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub locale_code: String,

    /// Human readable locale name
    #[arg(short, long, default_value = "Custom Locale")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating locale configuration template...");
        println!("  Locale code: {}", self.locale_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add abbreviations or dictionary words for the locale");
        println!("2. Validate your configuration:");
        println!(
            "   kugiri validate --locale-config {}",
            self.output.display()
        );
        println!("3. Use it for segmentation:");
        println!(
            "   kugiri segment -i input.txt --locale-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let code = canonicalize_tag(&self.locale_code)
            .map_err(|e| CliError::LocaleError(e.to_string()))?;
        let body = LocaleData::template(&code, &self.name).to_toml_string()?;

        Ok(format!(
            "# Locale configuration for {code}\n\
             #\n\
             # [sentence] abbreviations: words that do not end a sentence before a full stop\n\
             # [word] dictionary: lexicon for text written without spaces\n\
             \n\
             {body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(code: &str, output: PathBuf) -> GenerateConfigArgs {
        GenerateConfigArgs {
            locale_code: code.to_string(),
            name: "Custom Locale".to_string(),
            output,
        }
    }

    #[test]
    fn test_generate_template() {
        let template = args("pt-br", PathBuf::from("pt.toml")).generate_template().unwrap();
        assert!(template.starts_with("# Locale configuration for pt-BR"));

        let data = LocaleData::from_toml_str(&template).unwrap();
        assert_eq!(data.metadata.code, "pt-BR");
        assert_eq!(data.metadata.name, "Custom Locale");
    }

    #[test]
    fn test_rejects_invalid_code() {
        assert!(args("pt_BR", PathBuf::from("pt.toml")).generate_template().is_err());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("custom.toml");

        args("tlh", output_path.clone()).execute().unwrap();

        let data = LocaleData::from_file(&output_path).unwrap();
        assert_eq!(data.metadata.code, "tlh");
    }
}

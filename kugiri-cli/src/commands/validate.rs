//! Validate command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use kugiri_api::LocaleData;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to locale configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub locale_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating locale configuration: {}",
            self.locale_config.display()
        );

        match LocaleData::from_file(&self.locale_config) {
            Ok(data) => {
                println!("✓ Configuration is valid!");
                for line in summary(&data) {
                    println!("  {line}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}

fn summary(data: &LocaleData) -> Vec<String> {
    vec![
        format!("Locale code: {}", data.metadata.code),
        format!("Locale name: {}", data.metadata.name),
        format!("Abbreviations: {}", data.sentence.abbreviations.len()),
        format!("Dictionary words: {}", data.word.dictionary.len()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[metadata]
code = "pt-BR"
name = "Português"

[sentence]
abbreviations = ["Sr", "Sra"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{toml_content}").unwrap();

        let args = ValidateArgs {
            locale_config: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());

        let data = LocaleData::from_file(temp_file.path()).unwrap();
        assert_eq!(summary(&data)[2], "Abbreviations: 2");
    }

    #[test]
    fn test_validate_invalid_config() {
        let toml_content = r#"
[metadata]
code = ""
name = "Test"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{toml_content}").unwrap();

        let args = ValidateArgs {
            locale_config: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }
}

//! Locale configuration schema
//!
//! A locale file carries the data the boundary rules cannot derive from
//! Unicode properties alone: abbreviations that do not end a sentence and
//! a lexicon for scripts written without spaces.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::canonicalize_tag;
use crate::error::{ApiError, Result};

/// Root locale configuration
///
/// ```rust
/// use kugiri_api::LocaleData;
///
/// let data = LocaleData::from_toml_str(
///     r#"
/// [metadata]
/// code = "pt-BR"
/// name = "Português"
///
/// [sentence]
/// abbreviations = ["Sr", "Sra"]
/// "#,
/// )
/// .unwrap();
///
/// assert_eq!(data.metadata.name, "Português");
/// assert_eq!(data.sentence.abbreviations, ["Sr", "Sra"]);
/// assert!(data.word.dictionary.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleData {
    /// Tag and display name
    pub metadata: Metadata,
    /// Sentence suppressions
    #[serde(default)]
    pub sentence: SentenceSection,
    /// Word lexicon
    #[serde(default)]
    pub word: WordSection,
}

/// Locale metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Language tag, e.g. `"en"` or `"pt-BR"`
    pub code: String,
    /// Human readable name
    pub name: String,
}

/// Sentence segmentation data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSection {
    /// Words that do not end a sentence when followed by a full stop
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

/// Word segmentation data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSection {
    /// Lexicon for runs of space-less scripts
    #[serde(default)]
    pub dictionary: Vec<String>,
}

impl LocaleData {
    /// Parse a locale configuration from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let data: LocaleData = toml::from_str(source)
            .map_err(|e| ApiError::LocaleData(format!("failed to parse locale config: {e}")))?;
        data.validate()?;
        Ok(data)
    }

    /// Load a locale configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source).map_err(|err| match err {
            ApiError::LocaleData(msg) => ApiError::LocaleData(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Minimal configuration for a new locale
    pub fn template(code: &str, name: &str) -> Self {
        Self {
            metadata: Metadata {
                code: code.to_string(),
                name: name.to_string(),
            },
            sentence: SentenceSection {
                abbreviations: vec!["Dr".to_string(), "e.g".to_string()],
            },
            word: WordSection::default(),
        }
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::LocaleData(format!("failed to serialize locale config: {e}")))
    }

    /// Canonical form of the locale code
    pub fn canonical_code(&self) -> Result<String> {
        canonicalize_tag(&self.metadata.code)
    }

    /// Check the configuration for structural problems
    pub fn validate(&self) -> Result<()> {
        canonicalize_tag(&self.metadata.code).map_err(|_| {
            ApiError::LocaleData(format!(
                "metadata.code {:?} is not a valid language tag",
                self.metadata.code
            ))
        })?;

        if self.metadata.name.trim().is_empty() {
            return Err(ApiError::LocaleData("metadata.name must not be empty".into()));
        }

        check_entries("sentence.abbreviations", &self.sentence.abbreviations)?;
        check_entries("word.dictionary", &self.word.dictionary)?;
        Ok(())
    }
}

fn check_entries(section: &str, entries: &[String]) -> Result<()> {
    for entry in entries {
        if entry.trim().is_empty() {
            return Err(ApiError::LocaleData(format!("{section} contains an empty entry")));
        }
        if entry.chars().any(char::is_whitespace) {
            return Err(ApiError::LocaleData(format!(
                "{section} entry {entry:?} contains whitespace"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[metadata]
code = "en"
name = "English"

[sentence]
abbreviations = ["Mr", "Dr"]
"#;

    #[test]
    fn test_parse_minimal_config() {
        let data = LocaleData::from_toml_str(SAMPLE).unwrap();
        assert_eq!(data.metadata.code, "en");
        assert_eq!(data.sentence.abbreviations, vec!["Mr", "Dr"]);
        assert!(data.word.dictionary.is_empty());
    }

    #[test]
    fn test_rejects_invalid_code() {
        let source = SAMPLE.replace("\"en\"", "\"en_US\"");
        assert!(matches!(
            LocaleData::from_toml_str(&source),
            Err(ApiError::LocaleData(_))
        ));
    }

    #[test]
    fn test_rejects_whitespace_entries() {
        let source = SAMPLE.replace("\"Dr\"", "\"Dr Who\"");
        let err = LocaleData::from_toml_str(&source).unwrap_err();
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(LocaleData::from_toml_str("[metadata\ncode =").is_err());
        assert!(LocaleData::from_toml_str("[sentence]\nabbreviations = []").is_err());
    }

    #[test]
    fn test_template_round_trips() {
        let template = LocaleData::template("pt-BR", "Portuguese (Brazil)");
        let source = template.to_toml_string().unwrap();
        assert_eq!(LocaleData::from_toml_str(&source).unwrap(), template);
        assert_eq!(template.canonical_code().unwrap(), "pt-BR");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en.toml");
        fs::write(&path, SAMPLE).unwrap();
        assert_eq!(LocaleData::from_file(&path).unwrap().metadata.name, "English");

        let missing = dir.path().join("missing.toml");
        assert!(matches!(LocaleData::from_file(missing), Err(ApiError::Io(_))));
    }
}

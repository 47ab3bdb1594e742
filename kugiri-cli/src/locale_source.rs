//! Locale source management for CLI

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kugiri_api::{LocaleData, LocaleRegistry};

use crate::error::CliError;

/// Where the locale data for a run comes from
#[derive(Debug, Clone)]
pub enum LocaleOrigin {
    /// Built-in locale data
    BuiltIn(String),
    /// External locale configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
        /// Locale code declared by the file
        code: String,
    },
}

/// Resolved locale: the tag to request and the registry to request it from
#[derive(Debug)]
pub struct LocaleSelection {
    /// Where the data came from
    pub origin: LocaleOrigin,
    /// Registry to resolve against
    pub registry: LocaleRegistry,
}

impl LocaleOrigin {
    /// Get the display name for the locale source
    pub fn display_name(&self) -> String {
        match self {
            LocaleOrigin::BuiltIn(tag) => format!("Built-in: {tag}"),
            LocaleOrigin::External { path, code } => {
                format!("External: {} (code: {code})", path.display())
            }
        }
    }

    /// Tag to request from the registry
    pub fn tag(&self) -> &str {
        match self {
            LocaleOrigin::BuiltIn(tag) => tag,
            LocaleOrigin::External { code, .. } => code,
        }
    }
}

/// Select the locale for a run
///
/// An external file is registered next to the built-in locales; unless
/// `requested` names another locale, its own code is used.
pub fn select_locale(requested: Option<&str>, locale_config: Option<&Path>) -> Result<LocaleSelection> {
    let Some(path) = locale_config else {
        let tag = requested.unwrap_or(kugiri_api::locale::DEFAULT_LOCALE);
        return Ok(LocaleSelection {
            origin: LocaleOrigin::BuiltIn(tag.to_string()),
            registry: LocaleRegistry::with_builtin(),
        });
    };

    let data = LocaleData::from_file(path)
        .with_context(|| format!("Failed to load locale config: {}", path.display()))?;
    let code = data
        .canonical_code()
        .map_err(|e| CliError::LocaleError(e.to_string()))?;

    let mut registry = LocaleRegistry::with_builtin();
    registry.register(data)?;
    log::info!("registered external locale {code} from {}", path.display());

    let origin = match requested {
        Some(tag) => LocaleOrigin::BuiltIn(tag.to_string()),
        None => LocaleOrigin::External {
            path: path.to_path_buf(),
            code,
        },
    };
    Ok(LocaleSelection { origin, registry })
}

//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;

use super::InputSource;
use crate::error::CliError;

/// Resolve input arguments to sources
///
/// `-` stands for standard input and may appear once; every other argument
/// is a glob pattern that must match at least one file overall.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut files = Vec::new();
    let mut stdin = false;

    for pattern in patterns {
        if pattern == "-" {
            stdin = true;
            continue;
        }

        let paths = glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() && !stdin {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    let mut sources: Vec<InputSource> = Vec::with_capacity(files.len() + 1);
    if stdin {
        sources.push(InputSource::Stdin);
    }
    sources.extend(files.into_iter().map(InputSource::File));
    log::debug!("resolved {} input sources", sources.len());
    Ok(sources)
}

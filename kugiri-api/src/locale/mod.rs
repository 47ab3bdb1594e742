//! Locale identifiers and locale matching
//!
//! Requested tags are validated and canonicalized, then matched against the
//! available locales by truncating subtags from the right until one of them
//! is available.

pub mod data;
mod loader;
pub mod registry;

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ApiError, Result};

pub use data::LocaleData;
pub use registry::{LocaleEntry, LocaleRegistry};

/// Locale used when nothing requested is available
pub const DEFAULT_LOCALE: &str = "en";

/// Source of available locales for matching
pub trait LocaleSource {
    /// Whether `tag` (canonical form) has locale data
    fn is_available(&self, tag: &str) -> bool;

    /// Locale to fall back to when nothing requested matches
    fn default_locale(&self) -> &str;
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // language, script, region, variants, extensions, private use
        Regex::new(
            r"(?i)^(?:[a-z]{2,3}|[a-z]{5,8})(?:-[a-z]{4})?(?:-(?:[a-z]{2}|[0-9]{3}))?(?:-(?:[a-z0-9]{5,8}|[0-9][a-z0-9]{3}))*(?:-[0-9a-wy-z](?:-[a-z0-9]{2,8})+)*(?:-x(?:-[a-z0-9]{1,8})+)?$",
        )
        .expect("language tag pattern should always compile")
    })
}

/// Whether `tag` is a structurally valid language tag
pub fn is_structurally_valid(tag: &str) -> bool {
    tag_pattern().is_match(tag)
}

/// Validate and canonicalize one language tag
///
/// Language and everything after the first singleton are lowercased,
/// scripts are titlecased and regions uppercased.
pub fn canonicalize_tag(tag: &str) -> Result<String> {
    if !is_structurally_valid(tag) {
        return Err(ApiError::InvalidLocale(tag.to_string()));
    }

    let mut canonical = String::with_capacity(tag.len());
    let mut in_extension = false;

    for (position, subtag) in tag.split('-').enumerate() {
        if position > 0 {
            canonical.push('-');
        }
        if subtag.len() == 1 {
            in_extension = true;
        }

        let all_alpha = subtag.bytes().all(|b| b.is_ascii_alphabetic());
        if position == 0 || in_extension {
            canonical.push_str(&subtag.to_ascii_lowercase());
        } else if subtag.len() == 4 && all_alpha {
            let (first, rest) = subtag.split_at(1);
            canonical.push_str(&first.to_ascii_uppercase());
            canonical.push_str(&rest.to_ascii_lowercase());
        } else if subtag.len() == 2 && all_alpha {
            canonical.push_str(&subtag.to_ascii_uppercase());
        } else {
            canonical.push_str(&subtag.to_ascii_lowercase());
        }
    }

    Ok(canonical)
}

/// Canonicalize a list of requested tags, dropping duplicates
pub fn canonicalize_locale_list<S: AsRef<str>>(locales: &[S]) -> Result<Vec<String>> {
    let mut seen = Vec::with_capacity(locales.len());
    for locale in locales {
        let canonical = canonicalize_tag(locale.as_ref())?;
        if !seen.contains(&canonical) {
            seen.push(canonical);
        }
    }
    Ok(seen)
}

/// Strip extension and private use sequences from a canonical tag
fn strip_extensions(tag: &str) -> &str {
    let mut end = tag.len();
    let mut offset = 0;
    for subtag in tag.split('-') {
        if offset > 0 && subtag.len() == 1 {
            end = offset - 1;
            break;
        }
        offset += subtag.len() + 1;
    }
    &tag[..end]
}

/// Longest available prefix of a canonical tag
pub fn best_available<L: LocaleSource + ?Sized>(source: &L, tag: &str) -> Option<String> {
    let mut candidate = strip_extensions(tag);
    loop {
        if source.is_available(candidate) {
            return Some(candidate.to_string());
        }
        let cut = candidate.rfind('-')?;
        candidate = &candidate[..cut];
        // Drop a singleton left dangling by the truncation
        if let Some(dash) = candidate.rfind('-') {
            if candidate.len() - dash == 2 {
                candidate = &candidate[..dash];
            }
        }
    }
}

/// Resolve canonical requested tags to one available locale
pub fn lookup_matcher<L: LocaleSource + ?Sized>(source: &L, requested: &[String]) -> String {
    requested
        .iter()
        .find_map(|tag| best_available(source, tag))
        .unwrap_or_else(|| source.default_locale().to_string())
}

/// Requested tags that have a match, in request order
pub fn supported_locales<L: LocaleSource + ?Sized>(source: &L, requested: &[String]) -> Vec<String> {
    requested
        .iter()
        .filter(|tag| best_available(source, tag).is_some())
        .cloned()
        .collect()
}

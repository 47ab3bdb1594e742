//! Segmenter options and configuration

use std::fmt;
use std::str::FromStr;

use kugiri_core::Granularity;
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::locale::{canonicalize_tag, lookup_matcher, LocaleRegistry};
use crate::Segmenter;

/// Option defaults
pub mod defaults {
    use super::LocaleMatcher;
    use kugiri_core::Granularity;

    /// Default granularity
    pub const GRANULARITY: Granularity = Granularity::Grapheme;
    /// Default locale matching algorithm
    pub const LOCALE_MATCHER: LocaleMatcher = LocaleMatcher::BestFit;
}

const GRANULARITY_VALUES: &str = "grapheme, word, sentence";
const LOCALE_MATCHER_VALUES: &str = "lookup, best fit";

/// Locale matching algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LocaleMatcher {
    /// Truncating lookup
    #[serde(rename = "lookup")]
    Lookup,
    /// Implementation defined; resolves like `Lookup`
    #[default]
    #[serde(rename = "best fit")]
    BestFit,
}

impl LocaleMatcher {
    /// Option string for this matcher
    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleMatcher::Lookup => "lookup",
            LocaleMatcher::BestFit => "best fit",
        }
    }
}

impl fmt::Display for LocaleMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocaleMatcher {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "lookup" => Ok(LocaleMatcher::Lookup),
            "best fit" => Ok(LocaleMatcher::BestFit),
            other => Err(ApiError::invalid_option(
                "localeMatcher",
                other,
                LOCALE_MATCHER_VALUES,
            )),
        }
    }
}

/// Parse a granularity option string
pub fn parse_granularity(value: &str) -> Result<Granularity> {
    value
        .parse()
        .map_err(|_| ApiError::invalid_option("granularity", value, GRANULARITY_VALUES))
}

/// Unvalidated options bag, as passed to [`Segmenter::new`]
///
/// Values are strings so that out-of-set values can be reported with
/// [`ApiError::InvalidOption`]; absent values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmenterOptions {
    /// `"grapheme"`, `"word"` or `"sentence"`
    pub granularity: Option<String>,
    /// `"lookup"` or `"best fit"`
    pub locale_matcher: Option<String>,
}

impl SegmenterOptions {
    /// Empty options bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `granularity` option
    pub fn granularity(mut self, value: impl Into<String>) -> Self {
        self.granularity = Some(value.into());
        self
    }

    /// Set the `localeMatcher` option
    pub fn locale_matcher(mut self, value: impl Into<String>) -> Self {
        self.locale_matcher = Some(value.into());
        self
    }

    /// Validate `localeMatcher`
    pub fn resolve_locale_matcher(&self) -> Result<LocaleMatcher> {
        self.locale_matcher
            .as_deref()
            .map_or(Ok(defaults::LOCALE_MATCHER), str::parse)
    }

    /// Validate `granularity`
    pub fn resolve_granularity(&self) -> Result<Granularity> {
        self.granularity
            .as_deref()
            .map_or(Ok(defaults::GRANULARITY), parse_granularity)
    }
}

impl From<Granularity> for SegmenterOptions {
    fn from(granularity: Granularity) -> Self {
        Self::new().granularity(granularity.as_str())
    }
}

/// Resolved, immutable segmenter configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SegmenterConfig {
    locale: String,
    granularity: Granularity,
    #[serde(skip)]
    locale_matcher: LocaleMatcher,
}

impl SegmenterConfig {
    pub(crate) fn new(locale: String, granularity: Granularity, locale_matcher: LocaleMatcher) -> Self {
        Self {
            locale,
            granularity,
            locale_matcher,
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolved locale
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Segmentation granularity
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Matcher used to resolve the locale
    pub fn locale_matcher(&self) -> LocaleMatcher {
        self.locale_matcher
    }

    /// Resolved options as reported to callers
    pub fn resolved_options(&self) -> ResolvedOptions {
        ResolvedOptions {
            locale: self.locale.clone(),
            granularity: self.granularity,
        }
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self::new(
            crate::locale::DEFAULT_LOCALE.to_string(),
            defaults::GRANULARITY,
            defaults::LOCALE_MATCHER,
        )
    }
}

/// `{ locale, granularity }`, serialized in that key order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOptions {
    /// Locale the segmenter resolved to
    pub locale: String,
    /// Segmentation granularity
    pub granularity: Granularity,
}

impl ResolvedOptions {
    /// Compact JSON form, e.g. `{"locale":"fr","granularity":"grapheme"}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Fluent builder for [`SegmenterConfig`]
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    locales: Vec<String>,
    granularity: Option<Granularity>,
    locale_matcher: Option<LocaleMatcher>,
    registry: Option<LocaleRegistry>,
}

impl ConfigBuilder {
    /// Request a locale; the tag is validated immediately
    pub fn locale(mut self, tag: &str) -> Result<Self> {
        let canonical = canonicalize_tag(tag)?;
        if !self.locales.contains(&canonical) {
            self.locales.push(canonical);
        }
        Ok(self)
    }

    /// Request several locales in priority order
    pub fn locales<S: AsRef<str>>(mut self, tags: &[S]) -> Result<Self> {
        for tag in tags {
            self = self.locale(tag.as_ref())?;
        }
        Ok(self)
    }

    /// Set the granularity
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    /// Set the granularity from its option string
    pub fn granularity_str(self, value: &str) -> Result<Self> {
        Ok(self.granularity(parse_granularity(value)?))
    }

    /// Set the locale matcher
    pub fn locale_matcher(mut self, matcher: LocaleMatcher) -> Self {
        self.locale_matcher = Some(matcher);
        self
    }

    /// Resolve locales against `registry` instead of the built-in one
    pub fn registry(mut self, registry: LocaleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    fn registry_ref(&self) -> &LocaleRegistry {
        match &self.registry {
            Some(registry) => registry,
            None => LocaleRegistry::builtin(),
        }
    }

    /// Build the configuration
    pub fn build(&self) -> Result<SegmenterConfig> {
        let locale = lookup_matcher(self.registry_ref(), &self.locales);
        Ok(SegmenterConfig::new(
            locale,
            self.granularity.unwrap_or(defaults::GRANULARITY),
            self.locale_matcher.unwrap_or(defaults::LOCALE_MATCHER),
        ))
    }

    /// Build a segmenter directly
    pub fn build_segmenter(self) -> Result<Segmenter> {
        let config = self.build()?;
        Ok(Segmenter::from_parts(config, self.registry_ref()))
    }
}

//! Public API for kugiri text segmentation
//!
//! This crate exposes an `Intl.Segmenter` style interface over the boundary
//! rules in `kugiri-core`: a [`Segmenter`] is bound to a resolved locale and
//! a granularity, and [`Segmenter::segment`] returns a [`SegmentsView`] that
//! can be iterated or queried by code unit offset.
//!
//! ```rust
//! use kugiri_api::{Segmenter, SegmenterOptions};
//!
//! let segmenter = Segmenter::new(&["fr"], SegmenterOptions::new().granularity("word"))?;
//! let segments = segmenter.segment("Allons-y!");
//!
//! let words: Vec<String> = segments
//!     .iter()
//!     .filter(|s| s.is_word_like() == Some(true))
//!     .map(|s| s.text())
//!     .collect();
//! assert_eq!(words, vec!["Allons", "y"]);
//! assert_eq!(segments.containing(6).map(|s| s.text()).as_deref(), Some("-"));
//! # Ok::<(), kugiri_api::ApiError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod locale;
pub mod segments;

use std::sync::Arc;

use kugiri_core::BoundaryClassifier;

use error::Result;
use locale::{canonicalize_locale_list, lookup_matcher};

// Re-export key types
pub use config::{ConfigBuilder, LocaleMatcher, ResolvedOptions, SegmenterConfig, SegmenterOptions};
pub use dto::{Input, SegmentData};
pub use error::ApiError;
pub use kugiri_core::Granularity;
pub use locale::{LocaleData, LocaleRegistry, LocaleSource};
pub use segments::{Segment, Segments, SegmentsView};

/// Locale- and granularity-bound segmenter
///
/// Construction validates every option; once built, segmenting never fails.
/// Segmenters are cheap to clone and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmenterConfig,
    classifier: Arc<BoundaryClassifier>,
}

impl Segmenter {
    /// Create a segmenter for the first available of `locales`
    ///
    /// Tags are validated first, then `localeMatcher`, then `granularity`.
    /// An empty list resolves to the default locale.
    pub fn new<S: AsRef<str>>(locales: &[S], options: SegmenterOptions) -> Result<Self> {
        Self::with_registry(LocaleRegistry::builtin(), locales, options)
    }

    /// Same as [`Segmenter::new`], resolving against `registry`
    pub fn with_registry<S: AsRef<str>>(
        registry: &LocaleRegistry,
        locales: &[S],
        options: SegmenterOptions,
    ) -> Result<Self> {
        let requested = canonicalize_locale_list(locales)?;
        let locale_matcher = options.resolve_locale_matcher()?;
        let granularity = options.resolve_granularity()?;

        let locale = lookup_matcher(registry, &requested);
        let config = SegmenterConfig::new(locale, granularity, locale_matcher);
        Ok(Self::from_parts(config, registry))
    }

    /// Create a segmenter from a resolved configuration
    ///
    /// Locale data comes from the built-in registry; a locale it does not
    /// know segments with the plain rules.
    pub fn with_config(config: SegmenterConfig) -> Self {
        Self::from_parts(config, LocaleRegistry::builtin())
    }

    /// Create a segmenter for a single locale
    pub fn for_locale(locale: &str, granularity: Granularity) -> Result<Self> {
        Self::new(&[locale], SegmenterOptions::from(granularity))
    }

    /// Start a [`ConfigBuilder`]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub(crate) fn from_parts(config: SegmenterConfig, registry: &LocaleRegistry) -> Self {
        let classifier = registry.classifier(config.locale(), config.granularity());
        log::debug!(
            "created {} segmenter for locale {} (dictionary: {}, suppressions: {})",
            config.granularity(),
            config.locale(),
            classifier.has_run_segmenter(),
            classifier.has_suppressions()
        );
        Self {
            config,
            classifier: Arc::new(classifier),
        }
    }

    /// `{ locale, granularity }` this segmenter resolved to
    pub fn resolved_options(&self) -> ResolvedOptions {
        self.config.resolved_options()
    }

    /// Resolved configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segmentation granularity
    pub fn granularity(&self) -> Granularity {
        self.config.granularity()
    }

    /// Segment a string
    pub fn segment(&self, text: &str) -> SegmentsView {
        let units: Arc<[u16]> = text.encode_utf16().collect();
        self.segment_shared(units)
    }

    /// Segment UTF-16 code units, which may contain lone surrogates
    pub fn segment_utf16(&self, units: &[u16]) -> SegmentsView {
        self.segment_shared(Arc::from(units))
    }

    /// Read and segment an [`Input`]
    pub fn segment_input(&self, input: Input) -> Result<SegmentsView> {
        let units = input.read_units()?;
        Ok(self.segment_shared(Arc::from(units)))
    }

    fn segment_shared(&self, units: Arc<[u16]>) -> SegmentsView {
        let boundaries = self.classifier.classify_units(&units);
        log::trace!(
            "segmented {} code units into {} {} segments",
            units.len(),
            boundaries.segment_count(),
            self.granularity()
        );
        SegmentsView::new(units, boundaries, self.granularity())
    }

    /// Requested locales the built-in data supports, canonicalized
    pub fn supported_locales_of<S: AsRef<str>>(locales: &[S]) -> Result<Vec<String>> {
        LocaleRegistry::builtin().supported_locales_of(locales)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::with_config(SegmenterConfig::default())
    }
}

// Convenience functions

/// Segment `text` for one locale and return the segment records
pub fn segment_text(text: &str, locale: &str, granularity: Granularity) -> Result<Vec<SegmentData>> {
    let segmenter = Segmenter::for_locale(locale, granularity)?;
    Ok(segmenter.segment(text).to_data())
}

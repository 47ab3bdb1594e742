//! Registry of available locales

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use kugiri_core::{BoundaryClassifier, Granularity, ScriptRouter, SentenceSuppressor};

use super::data::LocaleData;
use super::{canonicalize_locale_list, canonicalize_tag, loader, supported_locales, LocaleSource};
use super::{lookup_matcher, DEFAULT_LOCALE};
use crate::error::{ApiError, Result};

/// Lexicon words every locale segments space-less runs with
#[derive(Debug, Clone, Default)]
struct SharedLexicon {
    words: Vec<String>,
    router: Arc<ScriptRouter>,
}

impl SharedLexicon {
    fn from_locales(locales: &[LocaleData]) -> Self {
        let words: Vec<String> = locales
            .iter()
            .flat_map(|data| data.word.dictionary.iter().cloned())
            .collect();
        let router = Arc::new(ScriptRouter::from_words(&words));
        Self { words, router }
    }

    /// Router over the shared words plus `extra`
    fn router_with(&self, extra: &[String]) -> Arc<ScriptRouter> {
        if extra.is_empty() {
            return self.router.clone();
        }
        Arc::new(ScriptRouter::from_words(self.words.iter().chain(extra)))
    }
}

/// Prepared data for one available locale
#[derive(Debug)]
pub struct LocaleEntry {
    data: LocaleData,
    runs: Arc<ScriptRouter>,
    suppressor: Option<Arc<SentenceSuppressor>>,
}

impl LocaleEntry {
    fn new(data: LocaleData, shared: &SharedLexicon) -> Self {
        let runs = shared.router_with(&data.word.dictionary);
        let suppressor = (!data.sentence.abbreviations.is_empty())
            .then(|| Arc::new(SentenceSuppressor::new(&data.sentence.abbreviations)));

        Self {
            data,
            runs,
            suppressor,
        }
    }

    /// Source configuration
    pub fn data(&self) -> &LocaleData {
        &self.data
    }

    /// Classifier for `granularity` with this locale's data attached
    pub fn classifier(&self, granularity: Granularity) -> BoundaryClassifier {
        let mut classifier = BoundaryClassifier::new(granularity);
        match granularity {
            Granularity::Word => {
                if !self.runs.is_empty() {
                    classifier = classifier.with_run_segmenter(self.runs.clone());
                }
            }
            Granularity::Sentence => {
                if let Some(suppressor) = &self.suppressor {
                    classifier = classifier.with_suppressions(suppressor.clone());
                }
            }
            Granularity::Grapheme => {}
        }
        classifier
    }
}

/// Available locales keyed by canonical tag
#[derive(Debug, Clone)]
///
/// Word classifiers of every locale, and of locales the registry does not
/// know, split space-less runs with the lexicons of the embedded locales.
/// A locale's own `[word] dictionary` adds to them.
pub struct LocaleRegistry {
    entries: HashMap<String, Arc<LocaleEntry>>,
    default_locale: String,
    shared: SharedLexicon,
}

static BUILTIN: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Registry without any locale data
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            default_locale: DEFAULT_LOCALE.to_string(),
            shared: SharedLexicon::default(),
        }
    }

    /// Shared registry of the embedded locales
    pub fn builtin() -> &'static LocaleRegistry {
        BUILTIN.get_or_init(|| {
            let embedded = loader::load_embedded();
            let mut registry = Self {
                shared: SharedLexicon::from_locales(&embedded),
                ..Self::empty()
            };
            for data in embedded {
                if let Err(e) = registry.register(data) {
                    log::warn!("skipping embedded locale: {e}");
                }
            }
            log::debug!(
                "loaded {} embedded locales",
                registry.available_locales().len()
            );
            registry
        })
    }

    /// Mutable copy of the embedded locales, for adding more
    pub fn with_builtin() -> Self {
        Self::builtin().clone()
    }

    /// Add or replace a locale
    pub fn register(&mut self, data: LocaleData) -> Result<()> {
        data.validate()?;
        let code = data.canonical_code()?;
        log::debug!("registering locale {code}");
        let entry = LocaleEntry::new(data, &self.shared);
        self.entries.insert(code, Arc::new(entry));
        Ok(())
    }

    /// Change the fallback locale; it must be registered
    pub fn with_default_locale(mut self, tag: &str) -> Result<Self> {
        let canonical = canonicalize_tag(tag)?;
        if !self.entries.contains_key(&canonical) {
            return Err(ApiError::InvalidLocale(tag.to_string()));
        }
        self.default_locale = canonical;
        Ok(self)
    }

    /// Registered locale tags, sorted
    pub fn available_locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Entry for a canonical tag
    pub fn entry(&self, tag: &str) -> Option<Arc<LocaleEntry>> {
        self.entries.get(tag).cloned()
    }

    /// Resolve requested tags to one available locale
    pub fn resolve<S: AsRef<str>>(&self, locales: &[S]) -> Result<String> {
        let requested = canonicalize_locale_list(locales)?;
        let resolved = lookup_matcher(self, &requested);
        log::debug!("resolved locale {resolved} from {requested:?}");
        Ok(resolved)
    }

    /// Requested tags that this registry can serve, canonicalized
    pub fn supported_locales_of<S: AsRef<str>>(&self, locales: &[S]) -> Result<Vec<String>> {
        let requested = canonicalize_locale_list(locales)?;
        Ok(supported_locales(self, &requested))
    }

    /// Classifier for a resolved locale
    ///
    /// Unknown locales get the plain rules plus the shared lexicon.
    pub fn classifier(&self, locale: &str, granularity: Granularity) -> BoundaryClassifier {
        match self.entries.get(locale) {
            Some(entry) => entry.classifier(granularity),
            None if granularity == Granularity::Word && !self.shared.router.is_empty() => {
                BoundaryClassifier::new(granularity).with_run_segmenter(self.shared.router.clone())
            }
            None => BoundaryClassifier::new(granularity),
        }
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl LocaleSource for LocaleRegistry {
    fn is_available(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    fn default_locale(&self) -> &str {
        &self.default_locale
    }
}

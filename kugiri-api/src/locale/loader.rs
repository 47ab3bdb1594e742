//! Embedded locale configurations

use super::data::LocaleData;

/// Built-in locale sources, embedded at compile time
const EMBEDDED: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.toml")),
    ("fr", include_str!("../../locales/fr.toml")),
    ("de", include_str!("../../locales/de.toml")),
    ("es", include_str!("../../locales/es.toml")),
    ("ja", include_str!("../../locales/ja.toml")),
    ("th", include_str!("../../locales/th.toml")),
    ("zh", include_str!("../../locales/zh.toml")),
];

/// Parse every embedded locale, skipping any that fail
pub(crate) fn load_embedded() -> Vec<LocaleData> {
    EMBEDDED
        .iter()
        .filter_map(|(code, source)| match LocaleData::from_toml_str(source) {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("failed to load embedded {code} locale config: {e}");
                None
            }
        })
        .collect()
}

//! String lookup for UI labels.
//!
//! Catalogs are nested JSON objects, one per language and namespace. Keys are
//! dotted paths into the object (`filterLabels.builtWith`). Lookups never
//! fail: a key missing from the requested language falls back to the base
//! language and then to the key itself.

use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// Language used when a requested language or key is unavailable
pub const BASE_LANG: &str = "en";

/// Languages with embedded catalogs
pub const SUPPORTED_LANGS: &[&str] = &["en", "es"];

const EMBEDDED_CATALOGS: &[(&str, &str, &str)] = &[
    ("en", "common", include_str!("../../locales/en/common.json")),
    ("es", "common", include_str!("../../locales/es/common.json")),
];

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("Invalid catalog for {lang}/{namespace}: {source}")]
    InvalidCatalog {
        lang: String,
        namespace: String,
        source: serde_json::Error,
    },
}

/// Anything that can map a translation key to a display string.
pub trait Translate {
    /// Language code the strings are produced for
    fn lang(&self) -> &str;

    /// Localized string for `key`; never fails
    fn t(&self, key: &str) -> String;
}

/// Translations for one language and namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct Translations {
    lang: String,
    namespace: String,
    catalog: Option<Arc<Value>>,
    fallback: Option<Arc<Value>>,
}

impl Translations {
    /// Translations from the embedded catalogs. Unsupported languages use
    /// the base language.
    pub fn new(lang: &str, namespace: &str) -> Self {
        let lang = normalize_lang(lang);
        Self {
            catalog: embedded_catalog(lang, namespace),
            fallback: embedded_catalog(BASE_LANG, namespace),
            lang: lang.to_string(),
            namespace: namespace.to_string(),
        }
    }

    /// Translations from a caller-supplied catalog, still backed by the
    /// embedded base-language catalog for missing keys.
    pub fn from_json(lang: &str, namespace: &str, json: &str) -> Result<Self, I18nError> {
        let catalog: Value =
            serde_json::from_str(json).map_err(|source| I18nError::InvalidCatalog {
                lang: lang.to_string(),
                namespace: namespace.to_string(),
                source,
            })?;

        Ok(Self {
            lang: lang.to_string(),
            namespace: namespace.to_string(),
            catalog: Some(Arc::new(catalog)),
            fallback: embedded_catalog(BASE_LANG, namespace),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Lookup without the key-as-fallback step
    pub fn get(&self, key: &str) -> Option<String> {
        [&self.catalog, &self.fallback]
            .into_iter()
            .flatten()
            .find_map(|catalog| lookup(catalog, key))
            .map(str::to_string)
    }
}

impl Translate for Translations {
    fn lang(&self) -> &str {
        &self.lang
    }

    fn t(&self, key: &str) -> String {
        self.get(key).unwrap_or_else(|| key.to_string())
    }
}

/// Reduce `es-ES` / `ES_es` style codes to a supported language
pub fn normalize_lang(lang: &str) -> &'static str {
    let primary = lang.trim().split(['-', '_']).next().unwrap_or_default();
    SUPPORTED_LANGS
        .iter()
        .copied()
        .find(|supported| supported.eq_ignore_ascii_case(primary))
        .unwrap_or(BASE_LANG)
}

fn lookup<'a>(catalog: &'a Value, key: &str) -> Option<&'a str> {
    // Flat keys containing dots win over nested paths
    if let Some(value) = catalog.get(key).and_then(Value::as_str) {
        return Some(value);
    }
    key.split('.')
        .try_fold(catalog, |node, segment| node.get(segment))
        .and_then(Value::as_str)
}

fn embedded_catalog(lang: &str, namespace: &str) -> Option<Arc<Value>> {
    static CATALOGS: OnceLock<BTreeMap<(&'static str, &'static str), Arc<Value>>> =
        OnceLock::new();

    let catalogs = CATALOGS.get_or_init(|| {
        EMBEDDED_CATALOGS
            .iter()
            .filter_map(|(lang, namespace, source)| {
                match serde_json::from_str::<Value>(source) {
                    Ok(value) => Some(((*lang, *namespace), Arc::new(value))),
                    Err(e) => {
                        log::error!("Embedded catalog {lang}/{namespace} is invalid: {e}");
                        None
                    }
                }
            })
            .collect()
    });

    catalogs
        .iter()
        .find(|((l, n), _)| *l == lang && *n == namespace)
        .map(|(_, value)| Arc::clone(value))
}

use dioxus::prelude::*;
use project_wiki_engine::{Translate, Translations, normalize_lang};

/// Translations for `lang` in the `common` namespace.
///
/// A `Translations` value provided through context is used when it was built
/// for the same language; otherwise the embedded catalogs are used.
pub fn use_translations(lang: &str) -> Translations {
    let provided = try_use_context::<Translations>();
    provided
        .filter(|translations| {
            translations.namespace() == "common"
                && (translations.lang() == lang || translations.lang() == normalize_lang(lang))
        })
        .unwrap_or_else(|| Translations::new(lang, "common"))
}

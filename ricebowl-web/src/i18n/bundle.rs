use once_cell::sync::Lazy;
use serde_json::Value;

pub const DEFAULT_LANG: &str = "ko";

const KO: &str = include_str!("../../i18n/ko.json");

pub struct I18nBundle {
    pub lang: &'static str,
    pub translations: Value,
}

fn build_bundle(lang: &'static str, raw: &str) -> I18nBundle {
    let translations = serde_json::from_str(raw).unwrap_or_else(|err| {
        log::warn!("translations for {lang} failed to parse: {err}");
        Value::Object(serde_json::Map::new())
    });
    I18nBundle { lang, translations }
}

static BUNDLE: Lazy<I18nBundle> = Lazy::new(|| build_bundle(DEFAULT_LANG, KO));

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    f(&BUNDLE)
}

/// Active language code.
#[must_use]
pub fn current_lang() -> &'static str {
    with_bundle(|bundle| bundle.lang)
}

/// Mirror the bundle language onto `<html lang>`.
pub fn apply_document_lang() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", current_lang());
        }
    }
}

use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Translate a key without substitutions.
///
/// Unknown keys come back unchanged.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key).and_then(|v| render_value(v, args))
    })
    .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_resolve() {
        assert_eq!(t("actions.start"), "대결 시작!");
        assert_eq!(t("panel.opponent.heading"), "상대방 정보");
    }

    #[test]
    fn placeholders_are_interpolated() {
        let mut args = BTreeMap::new();
        args.insert("name", "철수");
        assert_eq!(tr("result.bowls_of", Some(&args)), "철수의 밥그릇 수");
    }

    #[test]
    fn missing_or_branch_keys_echo_the_key() {
        assert_eq!(t("missing.key"), "missing.key");
        assert_eq!(t("panel.me"), "panel.me");
    }
}

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Thousands-grouped bowl count for the active locale.
///
/// Every count shown on screen, including the difference embedded in the
/// comment, goes through this formatter.
#[must_use]
pub fn fmt_count(value: u64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let num = ricebowl_game::numbers::count_to_f64(value);
        let locales = Array::new();
        locales.push(&JsValue::from_str(super::current_lang()));
        let nf = Intl::NumberFormat::new(&locales, &Object::new());
        let format_fn: Function = nf.format();
        format_fn
            .call1(&nf, &JsValue::from_f64(num))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| ricebowl_game::group_thousands(value))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ricebowl_game::group_thousands(value)
    }
}

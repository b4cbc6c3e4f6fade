use web_sys::{Document, Window};

/// Browser `window`, if running in one.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Show a blocking browser alert. Outside a browser the message is only logged.
pub fn alert(message: &str) {
    match window() {
        Some(win) => {
            if win.alert_with_message(message).is_err() {
                log::warn!("alert could not be shown: {message}");
            }
        }
        None => log::warn!("alert: {message}"),
    }
}

/// Move focus to the element with `id`, if present.
pub fn focus_by_id(id: &str) {
    use wasm_bindgen::JsCast;

    if let Some(el) = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use std::time::Duration;
use yew::Renderer;
use yew::platform::time::sleep;

use ricebowl_web::app::App;
use ricebowl_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn settle() {
    sleep(Duration::from_millis(20)).await;
}

async fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
}

fn click(selector: &str) {
    let doc = dom::document().expect("document");
    let el: HtmlElement = doc
        .query_selector(selector)
        .expect("query")
        .expect("element exists")
        .dyn_into()
        .expect("html element");
    el.click();
}

fn text_of(selector: &str) -> String {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("query")
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn both_panels_and_start_button_render() {
    render_app().await;
    let doc = dom::document().expect("document");
    assert!(doc.get_element_by_id("me-birth").is_some());
    assert!(doc.get_element_by_id("opponent-birth").is_some());
    assert!(doc.get_element_by_id("start-btn").is_some());
    assert_eq!(
        text_of("#me-birth .date-stepper__field--day .date-stepper__value"),
        "1일"
    );
}

#[wasm_bindgen_test]
async fn month_chevron_steps_and_wraps() {
    render_app().await;
    click("#me-birth .date-stepper__field--month .date-stepper__chevron--down");
    settle().await;
    assert_eq!(
        text_of("#me-birth .date-stepper__field--month .date-stepper__value"),
        "12월"
    );
}

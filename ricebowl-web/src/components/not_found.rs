use crate::i18n::t;
use yew::prelude::*;

fn home_href() -> String {
    format!("{}/", crate::paths::router_base().unwrap_or_default())
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main id="main" role="main" class="not-found">
            <h1>{ t("not_found.title") }</h1>
            <a href={home_href()}>{ t("not_found.home") }</a>
        </main>
    }
}

use crate::i18n::t;
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header role="banner" class="app-header">
            <div class="app-header__title">
                <span class="app-header__icon" aria-hidden="true">{ "🍲" }</span>
                <h1>{ t("app.title") }</h1>
                <span class="app-header__icon" aria-hidden="true">{ "🍲" }</span>
            </div>
            <p class="app-header__subtitle">{ t("app.subtitle") }</p>
        </header>
    }
}

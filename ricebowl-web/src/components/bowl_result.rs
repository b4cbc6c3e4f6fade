use crate::components::Theme;
use crate::i18n::{fmt_count, t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub name: AttrValue,
    pub bowls: u64,
    pub is_winner: bool,
    #[prop_or_default]
    pub theme: Theme,
}

#[function_component(BowlResult)]
pub fn bowl_result(p: &Props) -> Html {
    let mut args = BTreeMap::new();
    args.insert("name", p.name.as_str());
    let class = classes!(
        "bowl-result",
        p.theme.class(),
        p.is_winner.then_some("bowl-result--winner")
    );
    html! {
        <div {class}>
            <div class="bowl-result__title">
                <span aria-hidden="true">{ "🍚" }</span>
                { tr("result.bowls_of", Some(&args)) }
            </div>
            <div class="bowl-result__count">
                { fmt_count(p.bowls) }
                <span class="bowl-result__unit">{ t("result.unit") }</span>
            </div>
            if p.is_winner {
                <div class="bowl-result__winner">{ t("result.winner") }</div>
            }
        </div>
    }
}

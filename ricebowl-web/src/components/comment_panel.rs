use crate::i18n::{fmt_count, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub difference: u64,
    pub comment: AttrValue,
}

/// Shared panel under both players once the battle has started.
#[function_component(CommentPanel)]
pub fn comment_panel(p: &Props) -> Html {
    let difference = fmt_count(p.difference);
    let mut args = BTreeMap::new();
    args.insert("difference", difference.as_str());
    html! {
        <section class="comment-panel" aria-live="polite">
            <div class="comment-panel__vs" aria-hidden="true">{ "⚔️" }</div>
            <p class="comment-panel__text">
                { tr("comment.difference", Some(&args)) }
                <span class="comment-panel__message">{ p.comment.clone() }</span>
            </p>
        </section>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    html! {
        <button type="button" id={p.id.clone()} class={p.class.clone()} {onclick}>
            { p.label.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn button_renders_label_and_id() {
        let props = Props {
            label: AttrValue::from("대결 시작!"),
            onclick: Callback::noop(),
            id: Some(AttrValue::from("start-btn")),
            class: classes!("battle__button"),
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("대결 시작!"));
        assert!(html.contains("start-btn"));
        assert!(html.contains("battle__button"));
    }
}

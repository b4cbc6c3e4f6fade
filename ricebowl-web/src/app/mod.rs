use crate::components::not_found::NotFound;
use crate::router::Route;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod phase;
pub mod state;
pub mod view;

pub use phase::{BattleAction, BattleStore, start_blocker};
pub use view::BattleScreen;

#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <BattleScreen /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

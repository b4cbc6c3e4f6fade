use crate::app::phase::{BattleAction, BattleStore, start_blocker};
use crate::dom;
use ricebowl_game::{BattleConfig, Clock, SystemClock};
use std::rc::Rc;
use yew::prelude::*;

impl Reducible for BattleStore {
    type Action = BattleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        next.apply(action, SystemClock.now());
        Rc::new(next)
    }
}

#[cfg(target_arch = "wasm32")]
fn next_entropy() -> u64 {
    js_sys::Date::now().to_bits()
}

#[cfg(not(target_arch = "wasm32"))]
fn next_entropy() -> u64 {
    SystemClock.now().and_utc().timestamp_micros().unsigned_abs()
}

#[derive(Clone)]
pub struct AppState {
    pub store: UseReducerHandle<BattleStore>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        store: use_reducer(|| {
            BattleStore::new(
                BattleConfig::load_from_static(),
                SystemClock.current_year(),
                next_entropy(),
            )
        }),
    }
}

impl AppState {
    /// Callback feeding UI actions into the store.
    ///
    /// A start request without both birth dates raises the blocking alert and
    /// is not dispatched.
    #[must_use]
    pub fn dispatcher(&self) -> Callback<BattleAction> {
        let store = self.store.clone();
        Callback::from(move |action: BattleAction| {
            if action == BattleAction::Start {
                if let Some(message) = start_blocker(&store.session) {
                    dom::alert(&message);
                    return;
                }
            }
            store.dispatch(action);
        })
    }
}

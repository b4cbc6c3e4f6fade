use crate::app::phase::{BattleAction, BattleStore};
use crate::app::state::use_app_state;
use crate::components::button::Button;
use crate::components::comment_panel::CommentPanel;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::player_panel::{PanelOutcome, PlayerPanel};
use crate::i18n::t;
use ricebowl_game::PlayerSlot;
use yew::prelude::*;

fn render_panel(store: &BattleStore, slot: PlayerSlot, dispatch: &Callback<BattleAction>) -> Html {
    let session = &store.session;
    let started = store.is_started();
    let outcome = store
        .result
        .filter(|_| started)
        .map(|result| PanelOutcome {
            bowls: result.bowls(slot),
            is_winner: result.is_winner(slot),
        });
    html! {
        <PlayerPanel
            slot={slot}
            name={session.player(slot).display_name.clone()}
            shown_name={session.shown_name(slot).to_string()}
            stepper={session.stepper(slot).clone()}
            locked={started}
            outcome={outcome}
            on_action={dispatch.clone()}
        />
    }
}

pub fn render_battle(store: &BattleStore, dispatch: &Callback<BattleAction>) -> Html {
    let started = store.is_started();
    let action_button = if started {
        html! {
            <Button
                id="reset-btn"
                class={classes!("battle__button", "battle__button--reset")}
                label={t("actions.reset")}
                onclick={dispatch.reform(|_| BattleAction::Reset)}
            />
        }
    } else {
        html! {
            <Button
                id="start-btn"
                class={classes!("battle__button", "battle__button--start")}
                label={t("actions.start")}
                onclick={dispatch.reform(|_| BattleAction::Start)}
            />
        }
    };
    let comment = match (started, store.result, store.comment.as_ref()) {
        (true, Some(result), Some(comment)) => html! {
            <CommentPanel difference={result.difference} comment={comment.clone()} />
        },
        _ => Html::default(),
    };

    html! {
        <>
            <Header />
            <main id="main" role="main" class="battle">
                <div class="battle__panels">
                    { render_panel(store, PlayerSlot::Me, dispatch) }
                    { render_panel(store, PlayerSlot::Opponent, dispatch) }
                </div>
                <div class="battle__actions">{ action_button }</div>
                { comment }
            </main>
            <Footer />
        </>
    }
}

/// The whole battle screen with its own session state.
#[function_component(BattleScreen)]
pub fn battle_screen() -> Html {
    let state = use_app_state();
    render_battle(&state.store, &state.dispatcher())
}

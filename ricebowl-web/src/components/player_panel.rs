use crate::app::BattleAction;
use crate::components::Theme;
use crate::components::bowl_result::BowlResult;
use crate::components::date_stepper::DateStepperControl;
use crate::i18n::t;
use ricebowl_game::{DateField, DateStepper, PlayerSlot, StepDirection};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Per-player numbers shown once the battle has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelOutcome {
    pub bowls: u64,
    pub is_winner: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub slot: PlayerSlot,
    pub name: AttrValue,
    pub shown_name: AttrValue,
    pub stepper: DateStepper,
    #[prop_or_default]
    pub locked: bool,
    #[prop_or_default]
    pub outcome: Option<PanelOutcome>,
    pub on_action: Callback<BattleAction>,
}

#[function_component(PlayerPanel)]
pub fn player_panel(p: &Props) -> Html {
    let slot = p.slot;
    let key = slot.key();
    let theme = Theme::for_slot(slot);

    let on_name = {
        let cb = p.on_action.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(BattleAction::Rename(slot, input.value()));
            }
        })
    };
    let on_step = p
        .on_action
        .reform(move |(field, direction): (DateField, StepDirection)| {
            BattleAction::Step(slot, field, direction)
        });
    let on_input = p
        .on_action
        .reform(move |(field, text): (DateField, String)| BattleAction::Type(slot, field, text));
    let on_commit = p
        .on_action
        .reform(move |(field, text): (DateField, String)| BattleAction::Commit(slot, field, text));
    let on_edit = p.on_action.reform(move |field: DateField| BattleAction::Edit(slot, field));
    let on_cancel = p.on_action.reform(move |()| BattleAction::CancelEdit(slot));

    let result = p.outcome.map_or_else(Html::default, |outcome| {
        html! {
            <BowlResult
                name={p.shown_name.clone()}
                bowls={outcome.bowls}
                is_winner={outcome.is_winner}
                theme={theme}
            />
        }
    });

    html! {
        <section
            class={classes!("player-panel", theme.class())}
            aria-labelledby={format!("{key}-heading")}
        >
            <h2 id={format!("{key}-heading")} class="player-panel__heading">
                { t(&format!("panel.{key}.heading")) }
            </h2>
            <input
                id={format!("{key}-name")}
                class="player-panel__name"
                type="text"
                placeholder={t(&format!("panel.{key}.name_placeholder"))}
                value={p.name.clone()}
                oninput={on_name}
                disabled={p.locked}
            />
            <DateStepperControl
                id={format!("{key}-birth")}
                label={t(&format!("panel.{key}.date_label"))}
                stepper={p.stepper.clone()}
                theme={theme}
                {on_step}
                {on_input}
                {on_commit}
                {on_edit}
                {on_cancel}
            />
            { result }
        </section>
    }
}

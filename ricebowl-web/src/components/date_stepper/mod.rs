//! Year/month/day stepper driven by a core [`DateStepper`].
//!
//! The component holds no state of its own: every chevron click, wheel tick,
//! double-click or typed value is forwarded through the callbacks and the new
//! stepper comes back in through props.

mod interactions;
mod view;

use crate::components::Theme;
use ricebowl_game::{DateField, DateStepper, EditMode, StepDirection};
use yew::prelude::*;

pub use view::{input_id, value_text};

#[derive(Properties, PartialEq, Clone)]
pub struct DateStepperProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub stepper: DateStepper,
    #[prop_or_default]
    pub theme: Theme,
    pub on_step: Callback<(DateField, StepDirection)>,
    pub on_input: Callback<(DateField, String)>,
    pub on_commit: Callback<(DateField, String)>,
    pub on_edit: Callback<DateField>,
    pub on_cancel: Callback<()>,
}

#[function_component(DateStepperControl)]
pub fn date_stepper(props: &DateStepperProps) -> Html {
    let editing = match props.stepper.edit_mode() {
        EditMode::Editing(field) => Some(field),
        EditMode::Viewing => None,
    };
    {
        let id = props.id.clone();
        use_effect_with(editing, move |editing| {
            if let Some(field) = editing {
                crate::dom::focus_by_id(&input_id(&id, *field));
            }
        });
    }

    let disabled = !props.stepper.is_enabled();
    let class = classes!(
        "date-stepper",
        props.theme.class(),
        disabled.then_some("date-stepper--disabled")
    );
    html! {
        <div {class} id={props.id.clone()} aria-disabled={disabled.to_string()}>
            <span class="date-stepper__label">{ props.label.clone() }</span>
            <div class="date-stepper__fields">
                { for DateField::ALL.into_iter().map(|field| view::field_column(props, field)) }
            </div>
        </div>
    }
}

use super::DateStepperProps;
use super::interactions::{
    blur_handler, chevron_handler, edit_handler, edit_keydown_handler, input_handler,
    value_keydown_handler, wheel_handler,
};
use crate::i18n::{t, tr};
use ricebowl_game::{DateField, StepDirection};
use std::collections::BTreeMap;
use yew::prelude::*;

/// DOM id of the number input shown while `field` is being edited.
#[must_use]
pub fn input_id(prefix: &str, field: DateField) -> String {
    format!("{prefix}-{}-input", field.key())
}

/// Display text for a field, e.g. `1990년`.
#[must_use]
pub fn value_text(field: DateField, value: i64) -> String {
    let value = value.to_string();
    let mut args = BTreeMap::new();
    args.insert("value", value.as_str());
    tr(&format!("stepper.value.{}", field.key()), Some(&args))
}

fn chevron_label(field: DateField, direction: StepDirection) -> String {
    let name = t(&format!("stepper.field.{}", field.key()));
    let mut args = BTreeMap::new();
    args.insert("field", name.as_str());
    let key = match direction {
        StepDirection::Increment => "stepper.up",
        StepDirection::Decrement => "stepper.down",
    };
    tr(key, Some(&args))
}

fn chevron(props: &DateStepperProps, field: DateField, direction: StepDirection) -> Html {
    let (modifier, glyph) = match direction {
        StepDirection::Increment => ("date-stepper__chevron--up", "▲"),
        StepDirection::Decrement => ("date-stepper__chevron--down", "▼"),
    };
    html! {
        <button
            type="button"
            class={classes!("date-stepper__chevron", modifier)}
            aria-label={chevron_label(field, direction)}
            disabled={!props.stepper.is_enabled()}
            onclick={chevron_handler(props.on_step.clone(), field, direction)}
        >
            { glyph }
        </button>
    }
}

pub(super) fn field_column(props: &DateStepperProps, field: DateField) -> Html {
    let stepper = &props.stepper;
    let disabled = !stepper.is_enabled();
    let value = stepper.field_value(field);

    let body = if stepper.edit_mode().is_editing(field) {
        let bounds = stepper.bounds(field);
        html! {
            <input
                id={input_id(&props.id, field)}
                class="date-stepper__input"
                type="number"
                inputmode="numeric"
                value={value.to_string()}
                min={bounds.start().to_string()}
                max={bounds.end().to_string()}
                oninput={input_handler(props.on_input.clone(), field)}
                onblur={blur_handler(props.on_commit.clone(), field)}
                onkeydown={edit_keydown_handler(props.on_commit.clone(), props.on_cancel.clone(), field)}
            />
        }
    } else {
        html! {
            <span
                class="date-stepper__value"
                tabindex={if disabled { "-1" } else { "0" }}
                ondblclick={edit_handler(props.on_edit.clone(), field, disabled)}
                onkeydown={value_keydown_handler(props.on_step.clone(), props.on_edit.clone(), field, disabled)}
            >
                { value_text(field, value) }
            </span>
        }
    };

    html! {
        <div
            class={classes!("date-stepper__field", format!("date-stepper__field--{}", field.key()))}
            onwheel={wheel_handler(props.on_step.clone(), field, disabled)}
        >
            { chevron(props, field, StepDirection::Increment) }
            <div class="date-stepper__display">{ body }</div>
            { chevron(props, field, StepDirection::Decrement) }
        </div>
    }
}

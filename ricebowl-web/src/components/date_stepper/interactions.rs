use crate::input::{EditKey, arrow_step, edit_key, wheel_step};
use ricebowl_game::{DateField, StepDirection};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn wheel_handler(
    on_step: Callback<(DateField, StepDirection)>,
    field: DateField,
    disabled: bool,
) -> Callback<WheelEvent> {
    Callback::from(move |e: WheelEvent| {
        if disabled {
            return;
        }
        e.prevent_default();
        on_step.emit((field, wheel_step(e.delta_y())));
    })
}

pub fn chevron_handler(
    on_step: Callback<(DateField, StepDirection)>,
    field: DateField,
    direction: StepDirection,
) -> Callback<MouseEvent> {
    Callback::from(move |_| on_step.emit((field, direction)))
}

pub fn edit_handler(
    on_edit: Callback<DateField>,
    field: DateField,
    disabled: bool,
) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        if !disabled {
            on_edit.emit(field);
        }
    })
}

/// Arrow keys step, Enter opens the field for typing.
pub fn value_keydown_handler(
    on_step: Callback<(DateField, StepDirection)>,
    on_edit: Callback<DateField>,
    field: DateField,
    disabled: bool,
) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if disabled {
            return;
        }
        let key = e.key();
        if let Some(direction) = arrow_step(&key) {
            e.prevent_default();
            on_step.emit((field, direction));
        } else if key == "Enter" {
            e.prevent_default();
            on_edit.emit(field);
        }
    })
}

pub fn input_handler(
    on_input: Callback<(DateField, String)>,
    field: DateField,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            on_input.emit((field, input.value()));
        }
    })
}

pub fn blur_handler(
    on_commit: Callback<(DateField, String)>,
    field: DateField,
) -> Callback<FocusEvent> {
    Callback::from(move |e: FocusEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            on_commit.emit((field, input.value()));
        }
    })
}

pub fn edit_keydown_handler(
    on_commit: Callback<(DateField, String)>,
    on_cancel: Callback<()>,
    field: DateField,
) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| match edit_key(&e.key()) {
        Some(EditKey::Commit) => {
            e.prevent_default();
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_commit.emit((field, input.value()));
            }
        }
        Some(EditKey::Cancel) => {
            e.prevent_default();
            on_cancel.emit(());
        }
        None => {}
    })
}

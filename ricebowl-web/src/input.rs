//! Keyboard and wheel mapping for the date stepper.

use ricebowl_game::StepDirection;

/// What a key press does while a field is in edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Commit,
    Cancel,
}

#[must_use]
pub fn edit_key(key: &str) -> Option<EditKey> {
    match key {
        "Enter" => Some(EditKey::Commit),
        "Escape" => Some(EditKey::Cancel),
        _ => None,
    }
}

/// Arrow keys step a focused field while it is not being edited.
#[must_use]
pub fn arrow_step(key: &str) -> Option<StepDirection> {
    match key {
        "ArrowUp" => Some(StepDirection::Increment),
        "ArrowDown" => Some(StepDirection::Decrement),
        _ => None,
    }
}

/// One wheel tick per event, regardless of magnitude.
#[must_use]
pub fn wheel_step(delta_y: f64) -> StepDirection {
    StepDirection::from_wheel_delta(delta_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_keys_map_to_commit_and_cancel() {
        assert_eq!(edit_key("Enter"), Some(EditKey::Commit));
        assert_eq!(edit_key("Escape"), Some(EditKey::Cancel));
        assert_eq!(edit_key("a"), None);
    }

    #[test]
    fn arrows_and_wheel_step() {
        assert_eq!(arrow_step("ArrowUp"), Some(StepDirection::Increment));
        assert_eq!(arrow_step("ArrowDown"), Some(StepDirection::Decrement));
        assert_eq!(arrow_step("Tab"), None);
        assert_eq!(wheel_step(120.0), StepDirection::Decrement);
        assert_eq!(wheel_step(-3.0), StepDirection::Increment);
    }
}

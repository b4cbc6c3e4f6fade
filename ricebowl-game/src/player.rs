use crate::calendar::CalendarDate;
use crate::config::DefaultNames;
use serde::{Deserialize, Serialize};

/// Which of the two panels a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    Me,
    Opponent,
}

impl PlayerSlot {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Opponent => "opponent",
        }
    }

    #[must_use]
    pub fn default_name(self, names: &DefaultNames) -> &str {
        match self {
            Self::Me => &names.me,
            Self::Opponent => &names.opponent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub display_name: String,
    pub birth_date: Option<CalendarDate>,
}

impl Player {
    #[must_use]
    pub fn new(display_name: impl Into<String>, birth_date: Option<CalendarDate>) -> Self {
        Self {
            display_name: display_name.into(),
            birth_date,
        }
    }

    /// Entered name, or the slot's placeholder when the field was left empty.
    #[must_use]
    pub fn shown_name<'a>(&'a self, slot: PlayerSlot, names: &'a DefaultNames) -> &'a str {
        if self.display_name.is_empty() {
            slot.default_name(names)
        } else {
            &self.display_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_name_falls_back_to_slot_placeholder() {
        let names = DefaultNames::default();
        let anonymous = Player::default();
        assert_eq!(anonymous.shown_name(PlayerSlot::Me, &names), "나");
        assert_eq!(anonymous.shown_name(PlayerSlot::Opponent, &names), "상대방");

        let named = Player::new("민수", None);
        assert_eq!(named.shown_name(PlayerSlot::Opponent, &names), "민수");
    }

    #[test]
    fn slot_keys_name_the_panels() {
        assert_eq!(PlayerSlot::Me.key(), "me");
        assert_eq!(PlayerSlot::Opponent.key(), "opponent");
    }
}

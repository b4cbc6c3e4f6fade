pub mod bowl_result;
pub mod button;
pub mod comment_panel;
pub mod date_stepper;
pub mod footer;
pub mod header;
pub mod not_found;
pub mod player_panel;

use ricebowl_game::PlayerSlot;

/// Accent colour of a player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Blue,
    Red,
}

impl Theme {
    #[must_use]
    pub const fn for_slot(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::Me => Self::Blue,
            PlayerSlot::Opponent => Self::Red,
        }
    }

    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Blue => "theme-blue",
            Self::Red => "theme-red",
        }
    }
}

//! Comparison of two players' bowl counts.

use crate::bowls::compute_bowl_count_with;
use crate::player::{Player, PlayerSlot};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    AWins,
    BWins,
    Tie,
}

/// Derived comparison; player A sits in [`PlayerSlot::Me`], B in [`PlayerSlot::Opponent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub bowls_a: u64,
    pub bowls_b: u64,
    pub difference: u64,
    pub standing: Standing,
}

impl MatchResult {
    #[must_use]
    pub const fn from_counts(bowls_a: u64, bowls_b: u64) -> Self {
        let standing = if bowls_a > bowls_b {
            Standing::AWins
        } else if bowls_b > bowls_a {
            Standing::BWins
        } else {
            Standing::Tie
        };
        Self {
            bowls_a,
            bowls_b,
            difference: bowls_a.abs_diff(bowls_b),
            standing,
        }
    }

    #[must_use]
    pub const fn bowls(&self, slot: PlayerSlot) -> u64 {
        match slot {
            PlayerSlot::Me => self.bowls_a,
            PlayerSlot::Opponent => self.bowls_b,
        }
    }

    /// True only for a strictly greater count; nobody wins a tie.
    #[must_use]
    pub const fn is_winner(&self, slot: PlayerSlot) -> bool {
        matches!(
            (self.standing, slot),
            (Standing::AWins, PlayerSlot::Me) | (Standing::BWins, PlayerSlot::Opponent)
        )
    }

    /// Slots named as winner and loser in the comment.
    ///
    /// On a tie both roles fall to player A.
    #[must_use]
    pub const fn comment_roles(&self) -> (PlayerSlot, PlayerSlot) {
        match self.standing {
            Standing::AWins => (PlayerSlot::Me, PlayerSlot::Opponent),
            Standing::BWins => (PlayerSlot::Opponent, PlayerSlot::Me),
            Standing::Tie => (PlayerSlot::Me, PlayerSlot::Me),
        }
    }
}

/// Compare two players at `now`. `None` until both have a birth date.
#[must_use]
pub fn derive_match(
    a: &Player,
    b: &Player,
    now: NaiveDateTime,
    bowls_per_day: u64,
) -> Option<MatchResult> {
    let birth_a = a.birth_date?.start_of_day();
    let birth_b = b.birth_date?.start_of_day();
    Some(MatchResult::from_counts(
        compute_bowl_count_with(birth_a, now, bowls_per_day),
        compute_bowl_count_with(birth_b, now, bowls_per_day),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarDate;
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn from_counts_flags_strict_winner() {
        let result = MatchResult::from_counts(3, 1_095);
        assert_eq!(result.difference, 1_092);
        assert_eq!(result.standing, Standing::BWins);
        assert!(result.is_winner(PlayerSlot::Opponent));
        assert!(!result.is_winner(PlayerSlot::Me));
        assert_eq!(
            result.comment_roles(),
            (PlayerSlot::Opponent, PlayerSlot::Me)
        );
    }

    #[test]
    fn ties_have_no_winner() {
        let result = MatchResult::from_counts(300, 300);
        assert_eq!(result.difference, 0);
        assert_eq!(result.standing, Standing::Tie);
        assert!(!result.is_winner(PlayerSlot::Me));
        assert!(!result.is_winner(PlayerSlot::Opponent));
        assert_eq!(result.comment_roles(), (PlayerSlot::Me, PlayerSlot::Me));
    }

    #[test]
    fn derive_requires_both_birth_dates() {
        let dated = Player::new("", CalendarDate::new(2000, 1, 1).ok());
        let undated = Player::default();
        let now = noon(2026, 10, 19);
        assert!(derive_match(&dated, &undated, now, 3).is_none());
        assert!(derive_match(&undated, &dated, now, 3).is_none());
    }

    #[test]
    fn derive_counts_from_midnight_of_each_birth_date() {
        let now = noon(2026, 10, 19);
        let today = Player::new("A", CalendarDate::new(2026, 10, 19).ok());
        let last_year = Player::new("B", CalendarDate::new(2025, 10, 19).ok());
        let result = derive_match(&today, &last_year, now, 3).unwrap();
        assert_eq!(result.bowls_a, 3);
        // 365 days plus the twelve hours since midnight round up to 366.
        assert_eq!(result.bowls_b, 366 * 3);
        assert_eq!(result.standing, Standing::BWins);
    }

    #[test]
    fn derivation_is_order_independent() {
        let now = noon(2026, 10, 19);
        let a = Player::new("", CalendarDate::new(1990, 5, 1).ok());
        let b = Player::new("", CalendarDate::new(1985, 3, 2).ok());
        let ab = derive_match(&a, &b, now, 3).unwrap();
        let ba = derive_match(&b, &a, now, 3).unwrap();
        assert_eq!(ab.bowls_a, ba.bowls_b);
        assert_eq!(ab.bowls_b, ba.bowls_a);
        assert_eq!(ab.difference, ba.difference);
    }
}

//! Two-player battle flow: collect names and birth dates, then compare.

use crate::calendar::CalendarDate;
use crate::config::BattleConfig;
use crate::matchup::{MatchResult, derive_match};
use crate::messages::{IndexSource, select_message};
use crate::numbers::CountFormat;
use crate::player::{Player, PlayerSlot};
use crate::stepper::{DateField, DateStepper, StepDirection, StepOutcome};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    Input,
    Started,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StartError {
    #[error("both birth dates are required (missing: {})", missing_list(.0))]
    MissingBirthDates(Vec<PlayerSlot>),
}

fn missing_list(slots: &[PlayerSlot]) -> String {
    slots
        .iter()
        .map(|slot| slot.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Seat {
    player: Player,
    stepper: DateStepper,
}

impl Seat {
    fn new(config: &BattleConfig, current_year: i32) -> Self {
        Self {
            player: Player::default(),
            stepper: DateStepper::new(current_year).with_min_year(config.min_year),
        }
    }

    fn apply(&mut self, outcome: StepOutcome) -> StepOutcome {
        if let Some(date) = outcome.changed() {
            self.player.birth_date = Some(date);
        }
        outcome
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSession {
    config: BattleConfig,
    me: Seat,
    opponent: Seat,
    phase: BattlePhase,
}

impl BattleSession {
    #[must_use]
    pub fn new(config: BattleConfig, current_year: i32) -> Self {
        let me = Seat::new(&config, current_year);
        let opponent = Seat::new(&config, current_year);
        Self {
            config,
            me,
            opponent,
            phase: BattlePhase::Input,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub const fn phase(&self) -> BattlePhase {
        self.phase
    }

    #[must_use]
    pub const fn player(&self, slot: PlayerSlot) -> &Player {
        &self.seat(slot).player
    }

    #[must_use]
    pub const fn stepper(&self, slot: PlayerSlot) -> &DateStepper {
        &self.seat(slot).stepper
    }

    /// Entered name or the slot's placeholder.
    #[must_use]
    pub fn shown_name(&self, slot: PlayerSlot) -> &str {
        self.player(slot)
            .shown_name(slot, &self.config.default_names)
    }

    const fn seat(&self, slot: PlayerSlot) -> &Seat {
        match slot {
            PlayerSlot::Me => &self.me,
            PlayerSlot::Opponent => &self.opponent,
        }
    }

    fn seat_mut(&mut self, slot: PlayerSlot) -> &mut Seat {
        match slot {
            PlayerSlot::Me => &mut self.me,
            PlayerSlot::Opponent => &mut self.opponent,
        }
    }

    /// Update a display name. Ignored once the battle has started.
    pub fn set_name(&mut self, slot: PlayerSlot, name: impl Into<String>) -> bool {
        if self.phase == BattlePhase::Started {
            return false;
        }
        self.seat_mut(slot).player.display_name = name.into();
        true
    }

    /// Provide a birth date directly and move that stepper onto it.
    pub fn set_birth_date(&mut self, slot: PlayerSlot, date: CalendarDate) -> bool {
        if self.phase == BattlePhase::Started {
            return false;
        }
        let current_year = self.seat(slot).stepper.max_year();
        let min_year = self.config.min_year;
        if date.year() > current_year || date.year() < min_year {
            return false;
        }
        let seat = self.seat_mut(slot);
        seat.stepper = DateStepper::with_value(date, current_year).with_min_year(min_year);
        seat.player.birth_date = Some(date);
        true
    }

    pub fn step(&mut self, slot: PlayerSlot, field: DateField, direction: StepDirection) -> StepOutcome {
        let seat = self.seat_mut(slot);
        let outcome = seat.stepper.step(field, direction);
        seat.apply(outcome)
    }

    pub fn set_direct(&mut self, slot: PlayerSlot, field: DateField, text: &str) -> StepOutcome {
        let seat = self.seat_mut(slot);
        let outcome = seat.stepper.set_direct(field, text);
        seat.apply(outcome)
    }

    pub fn commit_direct(&mut self, slot: PlayerSlot, field: DateField, text: &str) -> StepOutcome {
        let seat = self.seat_mut(slot);
        let outcome = seat.stepper.commit_direct(field, text);
        seat.apply(outcome)
    }

    pub fn enter_edit_mode(&mut self, slot: PlayerSlot, field: DateField) -> bool {
        self.seat_mut(slot).stepper.enter_edit_mode(field)
    }

    pub fn exit_edit_mode(&mut self, slot: PlayerSlot) {
        self.seat_mut(slot).stepper.exit_edit_mode();
    }

    /// Whether [`BattleSession::start`] would succeed.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::MissingBirthDates`] naming every slot still without a
    /// birth date.
    pub fn check_ready(&self) -> Result<(), StartError> {
        let missing: Vec<PlayerSlot> = [PlayerSlot::Me, PlayerSlot::Opponent]
            .into_iter()
            .filter(|slot| self.player(*slot).birth_date.is_none())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(StartError::MissingBirthDates(missing))
        }
    }

    /// Switch to the result view.
    ///
    /// # Errors
    ///
    /// Fails like [`BattleSession::check_ready`]; the session is left untouched.
    pub fn start(&mut self) -> Result<(), StartError> {
        self.check_ready()?;
        self.phase = BattlePhase::Started;
        self.me.stepper.set_enabled(false);
        self.opponent.stepper.set_enabled(false);
        log::info!("battle started");
        Ok(())
    }

    /// Back to the input view, keeping names and dates.
    pub fn reset(&mut self) {
        self.phase = BattlePhase::Input;
        self.me.stepper.set_enabled(true);
        self.opponent.stepper.set_enabled(true);
        log::info!("battle reset");
    }

    /// Current comparison, independent of phase.
    #[must_use]
    pub fn result(&self, now: NaiveDateTime) -> Option<MatchResult> {
        derive_match(
            &self.me.player,
            &self.opponent.player,
            now,
            self.config.bowls_per_day,
        )
    }

    /// Comment for the shared panel, naming winner and loser.
    pub fn comment(
        &self,
        result: &MatchResult,
        source: &mut impl IndexSource,
        format: &impl CountFormat,
    ) -> String {
        let (winner, loser) = result.comment_roles();
        select_message(
            source,
            self.shown_name(winner),
            self.shown_name(loser),
            result.difference,
            format,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::FixedSequence;
    use crate::numbers::GroupedCount;
    use crate::stepper::EditMode;
    use chrono::NaiveDate;

    fn session() -> BattleSession {
        BattleSession::new(BattleConfig::default(), 2026)
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn start_requires_both_dates() {
        let mut s = session();
        assert_eq!(
            s.start(),
            Err(StartError::MissingBirthDates(vec![
                PlayerSlot::Me,
                PlayerSlot::Opponent
            ]))
        );
        s.step(PlayerSlot::Me, DateField::Day, StepDirection::Increment);
        let err = s.start().unwrap_err();
        assert_eq!(err, StartError::MissingBirthDates(vec![PlayerSlot::Opponent]));
        assert!(err.to_string().contains("opponent"));
        assert_eq!(s.phase(), BattlePhase::Input);
        assert!(s.stepper(PlayerSlot::Me).is_enabled());
    }

    #[test]
    fn stepping_records_birth_date() {
        let mut s = session();
        assert!(s.player(PlayerSlot::Me).birth_date.is_none());
        s.step(PlayerSlot::Me, DateField::Month, StepDirection::Increment);
        assert_eq!(
            s.player(PlayerSlot::Me).birth_date,
            CalendarDate::new(2026, 2, 1).ok()
        );
        assert!(s.player(PlayerSlot::Opponent).birth_date.is_none());

        s.set_direct(PlayerSlot::Opponent, DateField::Year, "1990");
        assert_eq!(
            s.player(PlayerSlot::Opponent).birth_date,
            CalendarDate::new(1990, 1, 1).ok()
        );
    }

    #[test]
    fn started_battle_locks_inputs_and_reset_keeps_values() {
        let mut s = session();
        s.set_name(PlayerSlot::Me, "지민");
        s.set_direct(PlayerSlot::Me, DateField::Year, "1995");
        s.set_direct(PlayerSlot::Opponent, DateField::Year, "1980");
        s.enter_edit_mode(PlayerSlot::Opponent, DateField::Day);
        s.start().unwrap();

        assert_eq!(s.phase(), BattlePhase::Started);
        assert_eq!(s.stepper(PlayerSlot::Opponent).edit_mode(), EditMode::Viewing);
        assert!(!s.set_name(PlayerSlot::Me, "other"));
        assert_eq!(
            s.step(PlayerSlot::Me, DateField::Year, StepDirection::Increment),
            StepOutcome::Unchanged
        );
        assert!(!s.enter_edit_mode(PlayerSlot::Me, DateField::Year));

        s.reset();
        assert_eq!(s.phase(), BattlePhase::Input);
        assert_eq!(s.shown_name(PlayerSlot::Me), "지민");
        assert_eq!(
            s.player(PlayerSlot::Me).birth_date,
            CalendarDate::new(1995, 1, 1).ok()
        );
        assert!(s.stepper(PlayerSlot::Me).is_enabled());
    }

    #[test]
    fn comment_names_winner_and_loser() {
        let mut s = session();
        s.set_name(PlayerSlot::Opponent, "할머니");
        s.set_birth_date(PlayerSlot::Me, CalendarDate::new(2000, 1, 1).unwrap());
        s.set_birth_date(PlayerSlot::Opponent, CalendarDate::new(1950, 1, 1).unwrap());
        let result = s.result(noon()).unwrap();
        assert!(result.is_winner(PlayerSlot::Opponent));

        let mut source = FixedSequence::new(vec![0]);
        let comment = s.comment(&result, &mut source, &GroupedCount::korean());
        let diff = GroupedCount::korean().format_count(result.difference);
        assert_eq!(
            comment,
            format!("할머니님이 {diff} 그릇을 더 드셨네요! 나님, 분발하셔야겠어요! 😄")
        );
    }

    #[test]
    fn set_birth_date_respects_year_bounds() {
        let mut s = session();
        assert!(!s.set_birth_date(PlayerSlot::Me, CalendarDate::new(1899, 12, 31).unwrap()));
        assert!(!s.set_birth_date(PlayerSlot::Me, CalendarDate::new(2027, 1, 1).unwrap()));
        assert!(s.set_birth_date(PlayerSlot::Me, CalendarDate::new(1988, 8, 8).unwrap()));
        assert_eq!(s.stepper(PlayerSlot::Me).month(), 8);
    }
}

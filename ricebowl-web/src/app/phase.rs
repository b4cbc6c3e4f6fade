//! Pure state transitions behind the battle screen.

use crate::i18n::{self, fmt_count};
use chrono::NaiveDateTime;
use rand_chacha::ChaCha20Rng;
use ricebowl_game::{
    BattleConfig, BattlePhase, BattleSession, DateField, MatchResult, PlayerSlot, RngSource,
    StepDirection,
};

/// Everything the UI can ask of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleAction {
    Rename(PlayerSlot, String),
    Step(PlayerSlot, DateField, StepDirection),
    Type(PlayerSlot, DateField, String),
    Commit(PlayerSlot, DateField, String),
    Edit(PlayerSlot, DateField),
    CancelEdit(PlayerSlot),
    Start,
    Reset,
}

#[derive(Debug, Clone)]
pub struct BattleStore {
    pub session: BattleSession,
    pub result: Option<MatchResult>,
    pub comment: Option<String>,
    rng: RngSource<ChaCha20Rng>,
}

impl BattleStore {
    #[must_use]
    pub fn new(config: BattleConfig, current_year: i32, seed: u64) -> Self {
        Self {
            session: BattleSession::new(config, current_year),
            result: None,
            comment: None,
            rng: RngSource::from_seed(seed),
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.session.phase() == BattlePhase::Started
    }

    /// Apply one action and refresh the derived comparison at `now`.
    ///
    /// The comment is drawn once, when the battle starts, and kept until reset.
    pub fn apply(&mut self, action: BattleAction, now: NaiveDateTime) {
        match action {
            BattleAction::Rename(slot, name) => {
                self.session.set_name(slot, name);
            }
            BattleAction::Step(slot, field, direction) => {
                self.session.step(slot, field, direction);
            }
            BattleAction::Type(slot, field, text) => {
                self.session.set_direct(slot, field, &text);
            }
            BattleAction::Commit(slot, field, text) => {
                self.session.commit_direct(slot, field, &text);
            }
            BattleAction::Edit(slot, field) => {
                self.session.enter_edit_mode(slot, field);
            }
            BattleAction::CancelEdit(slot) => self.session.exit_edit_mode(slot),
            BattleAction::Start => match self.session.start() {
                Ok(()) => {
                    let result = self.session.result(now);
                    self.comment =
                        result.map(|r| self.session.comment(&r, &mut self.rng, &fmt_count));
                }
                Err(err) => log::info!("start refused: {err}"),
            },
            BattleAction::Reset => {
                self.session.reset();
                self.comment = None;
            }
        }
        self.result = self.session.result(now);
    }
}

/// Alert text when the battle cannot start yet.
#[must_use]
pub fn start_blocker(session: &BattleSession) -> Option<String> {
    session.check_ready().err().map(|err| {
        log::info!("start refused: {err}");
        i18n::t("alert.missing_dates")
    })
}

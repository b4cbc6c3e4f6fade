mod catalog;

pub use catalog::{catalog_scenarios, expand_scenarios, find_scenario, list_scenarios};

use anyhow::Result;
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use ricebowl_game::{CalendarDate, MIN_YEAR, days_in_month};

/// Longest lifetime generated by [`ScenarioCtx::random_birth_instant`].
const MAX_AGE_MS: i64 = 130 * 365 * 24 * 60 * 60 * 1000;

pub type ScenarioCheck = fn(&mut ScenarioCtx) -> Result<()>;

/// A named logic check run once per seed and iteration.
#[derive(Clone)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    check: ScenarioCheck,
}

impl Scenario {
    pub const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        check: ScenarioCheck,
    ) -> Self {
        Self {
            key,
            name,
            description,
            check,
        }
    }

    pub fn run(&self, seed: u64) -> Result<()> {
        let mut ctx = ScenarioCtx::new(seed);
        (self.check)(&mut ctx)
    }
}

/// Per-iteration inputs: a seeded generator and a pinned "now".
pub struct ScenarioCtx {
    pub seed: u64,
    pub rng: ChaCha20Rng,
    pub now: NaiveDateTime,
}

impl ScenarioCtx {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let base = NaiveDate::from_ymd_opt(2026, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        let offset = TimeDelta::milliseconds(rng.gen_range(0..3 * 365 * 24 * 60 * 60 * 1000));
        let now = base.checked_add_signed(offset).unwrap_or(base);
        Self { seed, rng, now }
    }

    /// A birth date the date stepper could produce at `now`.
    pub fn random_birth_date(&mut self) -> CalendarDate {
        let year = self.rng.gen_range(MIN_YEAR..=self.now.year());
        let month = self.rng.gen_range(1..=12);
        let day = self.rng.gen_range(1..=days_in_month(year, month));
        CalendarDate::new(year, month, day).unwrap_or_else(|_| CalendarDate::from(self.now.date()))
    }

    /// Any instant up to roughly 130 years before `now`.
    pub fn random_birth_instant(&mut self) -> NaiveDateTime {
        let back = TimeDelta::milliseconds(self.rng.gen_range(0..=MAX_AGE_MS));
        self.now.checked_sub_signed(back).unwrap_or(self.now)
    }
}

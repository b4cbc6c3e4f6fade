//! Rice Bowl Battle core
//!
//! Platform-agnostic logic for the rice bowl comparison: day counting, the
//! comment pool, the date stepper state machine and the two-player session.
//! Nothing here touches the DOM; time and randomness are injected.

pub mod bowls;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod matchup;
pub mod messages;
pub mod numbers;
pub mod player;
pub mod session;
pub mod stepper;

// Re-export commonly used types
pub use bowls::{BOWLS_PER_DAY, compute_bowl_count, compute_bowl_count_with, elapsed_days};
pub use calendar::{CalendarDate, CalendarError, MIN_YEAR, days_in_month, is_leap_year};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BattleConfig, ConfigError, DefaultNames};
pub use matchup::{MatchResult, Standing, derive_match};
pub use messages::{
    FixedSequence, IndexSource, MESSAGE_COUNT, RngSource, render_template, select_message,
};
pub use numbers::{CountFormat, GroupedCount, group_thousands};
pub use player::{Player, PlayerSlot};
pub use session::{BattlePhase, BattleSession, StartError};
pub use stepper::{
    DateField, DateStepper, EditMode, RejectReason, StepDirection, StepOutcome,
};

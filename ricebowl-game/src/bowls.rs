//! Day-count engine: elapsed days since birth, times the bowls eaten per day.

use chrono::NaiveDateTime;

/// Bowls of rice credited for every day alive.
pub const BOWLS_PER_DAY: u64 = 3;

/// Milliseconds in one day.
pub const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Whole days between `birth` and `now`, rounded up and sign-discarded.
///
/// Any positive sub-day gap counts as a full day, so a birth at the start of
/// today reports one day as soon as the clock has moved past midnight.
#[must_use]
pub fn elapsed_days(birth: NaiveDateTime, now: NaiveDateTime) -> u64 {
    let elapsed_ms = now
        .signed_duration_since(birth)
        .num_milliseconds()
        .unsigned_abs();
    elapsed_ms.div_ceil(MS_PER_DAY)
}

/// Bowl count using the standard three bowls per day.
#[must_use]
pub fn compute_bowl_count(birth: NaiveDateTime, now: NaiveDateTime) -> u64 {
    compute_bowl_count_with(birth, now, BOWLS_PER_DAY)
}

/// Bowl count with an explicit per-day rate, saturating at `u64::MAX`.
#[must_use]
pub fn compute_bowl_count_with(birth: NaiveDateTime, now: NaiveDateTime, bowls_per_day: u64) -> u64 {
    elapsed_days(birth, now).saturating_mul(bowls_per_day)
}

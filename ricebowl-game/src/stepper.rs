//! Date-stepper control model.
//!
//! Holds a year/month/day triple that is edited field by field, either by
//! stepping (chevrons, wheel ticks) or by typing a number while the field is
//! in edit mode. Every committed change is re-validated as a whole date; a
//! triple that does not exist on the calendar is rolled back.

use crate::calendar::{CalendarDate, MIN_YEAR, days_in_month};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl DateField {
    pub const ALL: [Self; 3] = [Self::Year, Self::Month, Self::Day];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepDirection {
    Increment,
    Decrement,
}

impl StepDirection {
    /// Wheel scrolling down (positive `deltaY`) steps backwards.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            Self::Decrement
        } else {
            Self::Increment
        }
    }

    const fn delta(self) -> i64 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

/// Which field, if any, currently accepts typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing(DateField),
}

impl EditMode {
    #[must_use]
    pub fn is_editing(self, field: DateField) -> bool {
        self == Self::Editing(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Unparsable,
    OutOfRange,
    NotACalendarDate,
}

/// Result of a stepping or editing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// State moved to this date; callers should propagate it.
    Changed(CalendarDate),
    /// Nothing happened (disabled control, or a year step past its bounds).
    Unchanged,
    /// Input was refused and the previous triple kept.
    Rejected(RejectReason),
}

impl StepOutcome {
    #[must_use]
    pub const fn changed(self) -> Option<CalendarDate> {
        match self {
            Self::Changed(date) => Some(date),
            Self::Unchanged | Self::Rejected(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStepper {
    year: i32,
    month: u32,
    day: u32,
    edit: EditMode,
    enabled: bool,
    min_year: i32,
    max_year: i32,
}

impl DateStepper {
    /// A control showing January 1st of `current_year`.
    #[must_use]
    pub fn new(current_year: i32) -> Self {
        Self {
            year: current_year,
            month: 1,
            day: 1,
            edit: EditMode::Viewing,
            enabled: true,
            min_year: MIN_YEAR.min(current_year),
            max_year: current_year,
        }
    }

    /// A control seeded from an existing date.
    #[must_use]
    pub fn with_value(date: CalendarDate, current_year: i32) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            ..Self::new(current_year)
        }
    }

    /// Override the earliest selectable year (clamped to the current year).
    #[must_use]
    pub fn with_min_year(mut self, min_year: i32) -> Self {
        self.min_year = min_year.min(self.max_year);
        self
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub const fn edit_mode(&self) -> EditMode {
        self.edit
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current triple as a date.
    #[must_use]
    pub fn value(&self) -> Option<CalendarDate> {
        CalendarDate::new(self.year, self.month, self.day).ok()
    }

    /// Last valid day of the displayed month.
    #[must_use]
    pub const fn max_day(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    #[must_use]
    pub const fn max_year(&self) -> i32 {
        self.max_year
    }

    #[must_use]
    pub const fn year_bounds(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    /// Accepted values for `field`, given the live year and month.
    #[must_use]
    pub fn bounds(&self, field: DateField) -> RangeInclusive<i64> {
        match field {
            DateField::Year => i64::from(self.min_year)..=i64::from(self.max_year),
            DateField::Month => 1..=12,
            DateField::Day => 1..=i64::from(self.max_day()),
        }
    }

    #[must_use]
    pub const fn field_value(&self, field: DateField) -> i64 {
        match field {
            DateField::Year => self.year as i64,
            DateField::Month => self.month as i64,
            DateField::Day => self.day as i64,
        }
    }

    /// Enable or disable the control. Disabling leaves edit mode.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.edit = EditMode::Viewing;
        }
    }

    /// Step one field up or down.
    pub fn step(&mut self, field: DateField, direction: StepDirection) -> StepOutcome {
        if !self.enabled {
            return StepOutcome::Unchanged;
        }
        let delta = direction.delta();
        match field {
            DateField::Year => {
                let next = i64::from(self.year) + delta;
                if !self.bounds(DateField::Year).contains(&next) {
                    return StepOutcome::Unchanged;
                }
                let Ok(year) = i32::try_from(next) else {
                    return StepOutcome::Unchanged;
                };
                self.commit(year, self.month, self.day)
            }
            DateField::Month => {
                let month = wrap(i64::from(self.month) + delta, 12);
                self.commit(self.year, month, self.day)
            }
            DateField::Day => {
                let day = wrap(i64::from(self.day) + delta, i64::from(self.max_day()));
                self.commit(self.year, self.month, day)
            }
        }
    }

    /// Commit a typed value for `field`.
    ///
    /// Only the leading integer of `text` counts, so `"2.5"` reads as 2 and
    /// `"12abc"` as 12. Text without leading digits or an out-of-range value
    /// leaves the triple untouched. Edit mode is not changed; see
    /// [`DateStepper::commit_direct`].
    pub fn set_direct(&mut self, field: DateField, text: &str) -> StepOutcome {
        if !self.enabled {
            return StepOutcome::Unchanged;
        }
        let Some(value) = parse_leading_int(text) else {
            log::debug!("ignoring unparsable {} input {text:?}", field.key());
            return StepOutcome::Rejected(RejectReason::Unparsable);
        };
        if !self.bounds(field).contains(&value) {
            log::debug!("ignoring out-of-range {} value {value}", field.key());
            return StepOutcome::Rejected(RejectReason::OutOfRange);
        }
        match field {
            DateField::Year => match i32::try_from(value) {
                Ok(year) => self.commit(year, self.month, self.day),
                Err(_) => StepOutcome::Rejected(RejectReason::OutOfRange),
            },
            DateField::Month => match u32::try_from(value) {
                Ok(month) => self.commit(self.year, month, self.day),
                Err(_) => StepOutcome::Rejected(RejectReason::OutOfRange),
            },
            DateField::Day => match u32::try_from(value) {
                Ok(day) => self.commit(self.year, self.month, day),
                Err(_) => StepOutcome::Rejected(RejectReason::OutOfRange),
            },
        }
    }

    /// Commit typed text and leave edit mode, as happens when the input blurs.
    pub fn commit_direct(&mut self, field: DateField, text: &str) -> StepOutcome {
        let outcome = self.set_direct(field, text);
        self.exit_edit_mode();
        outcome
    }

    /// Double-activation on a field. Returns whether edit mode was entered.
    pub fn enter_edit_mode(&mut self, field: DateField) -> bool {
        if !self.enabled {
            return false;
        }
        self.edit = EditMode::Editing(field);
        true
    }

    pub fn exit_edit_mode(&mut self) {
        self.edit = EditMode::Viewing;
    }

    fn commit(&mut self, year: i32, month: u32, day: u32) -> StepOutcome {
        match CalendarDate::new(year, month, day) {
            Ok(date) => {
                self.year = year;
                self.month = month;
                self.day = day;
                StepOutcome::Changed(date)
            }
            Err(err) => {
                log::debug!("rolling back date edit: {err}");
                StepOutcome::Rejected(RejectReason::NotACalendarDate)
            }
        }
    }
}

/// Leading signed integer of `text` after whitespace; `None` without digits.
///
/// Digit runs past `i64` saturate so they land out of range rather than unparsable.
fn parse_leading_int(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Wrap `value` into `1..=len`.
fn wrap(value: i64, len: i64) -> u32 {
    if len <= 0 {
        return 1;
    }
    let wrapped = (value - 1).rem_euclid(len) + 1;
    u32::try_from(wrapped).unwrap_or(1)
}

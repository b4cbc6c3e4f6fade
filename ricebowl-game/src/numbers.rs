//! Count formatting and numeric conversion helpers.

use num_traits::cast::cast;

/// Formats bowl counts for display.
///
/// The message templates and the result panels share one implementation so a
/// difference always reads the same everywhere it appears.
pub trait CountFormat {
    fn format_count(&self, value: u64) -> String;
}

/// Fixed-locale thousands grouping (`1234567` → `1,234,567`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupedCount {
    separator: char,
}

impl GroupedCount {
    #[must_use]
    pub const fn new(separator: char) -> Self {
        Self { separator }
    }

    /// Grouping used by the `ko-KR` locale.
    #[must_use]
    pub const fn korean() -> Self {
        Self::new(',')
    }
}

impl Default for GroupedCount {
    fn default() -> Self {
        Self::korean()
    }
}

impl CountFormat for GroupedCount {
    fn format_count(&self, value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                out.push(self.separator);
            }
            out.push(ch);
        }
        out
    }
}

impl<F> CountFormat for F
where
    F: Fn(u64) -> String,
{
    fn format_count(&self, value: u64) -> String {
        self(value)
    }
}

/// Convenience wrapper over [`GroupedCount::korean`].
#[must_use]
pub fn group_thousands(value: u64) -> String {
    GroupedCount::korean().format_count(value)
}

/// Convert a count to f64 for browser formatting, allowing precision loss in one place.
#[must_use]
pub fn count_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(f64::MAX)
}

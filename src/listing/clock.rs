//! Time source and date helpers for listing parsers
//!
//! Listings often omit the year. The parser resolves it against a `Clock`
//! so tests can pin "now" to a fixed instant.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Entries without a year are assumed to be younger than this.
const YEAR_GUESS_WINDOW_DAYS: i64 = 350;

/// Pick the year for a yearless timestamp.
///
/// Candidates run from last year upward; the first one less than 350 days
/// older than `now` wins. Years where the date does not exist (Feb 29) are
/// skipped.
pub fn guess_year(
    now: DateTime<Utc>,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Option<DateTime<Utc>> {
    let window = Duration::days(YEAR_GUESS_WINDOW_DAYS);
    let current = now.year();
    (current - 1..current + 100)
        .filter_map(|year| utc_datetime(year, month, day, hour, minute))
        .find(|t| now - *t < window)
}

/// UTC timestamp at minute precision, `None` for impossible dates.
pub(crate) fn utc_datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single()
}

/// Case-insensitive three-letter month name to 1-12.
pub(crate) fn month_from_abbrev(token: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    if token.len() != 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(token))
        .map(|i| i as u32 + 1)
}

//! Calendar-time policy shared by missions, buffs and daily batches.
//!
//! Everything here is recomputed fresh on every check with `now` as an
//! explicit parameter - "today" changes without any event firing, so none
//! of these answers may be cached.

use chrono::{DateTime, Datelike, Utc};

/// True if both timestamps fall on the same calendar date (not within 24h
/// of each other - a completion at 23:59 and a check at 00:01 are on
/// different days).
pub fn same_calendar_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// True if `now` is past a daily reset boundary relative to `prev`.
///
/// The engine never watches the clock itself; the persistence layer calls
/// this to decide when to regenerate the daily quest batch.
pub fn is_new_day(prev: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    prev.date_naive() != now.date_naive()
}

/// Weekday index with the web convention: 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(at: DateTime<Utc>) -> u8 {
    at.weekday().num_days_from_sunday() as u8
}

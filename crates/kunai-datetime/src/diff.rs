//! Calendar differences between two instants.
//!
//! Fixed-length units (millisecond through week) divide the raw elapsed
//! milliseconds. Calendar-length units (month, quarter, year) count true
//! elapsed calendar months from the year/month fields, so a 28-day
//! February and a 31-day January both count as one month.

use crate::constants::{
    MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, MILLIS_PER_WEEK,
};
use crate::date::CalendarDate;

/// A difference unit tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Quarters,
    Years,
}

impl Unit {
    /// Every unit tag, the default set for [`difference`].
    pub const ALL: [Self; 9] = [
        Self::Milliseconds,
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Weeks,
        Self::Months,
        Self::Quarters,
        Self::Years,
    ];
}

/// Per-unit elapsed magnitudes; only the requested units are populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Difference {
    pub milliseconds: Option<u64>,
    pub seconds: Option<u64>,
    pub minutes: Option<u64>,
    pub hours: Option<u64>,
    pub days: Option<u64>,
    pub weeks: Option<u64>,
    pub months: Option<u64>,
    pub quarters: Option<u64>,
    pub years: Option<u64>,
}

/// Computes the elapsed magnitude between two instants in every unit.
///
/// Order-independent: `difference(a, b)` equals `difference(b, a)`.
#[must_use]
pub fn difference(from: CalendarDate, to: CalendarDate) -> Difference {
    difference_in(from, to, &Unit::ALL)
}

/// Computes the elapsed magnitude between two instants in the requested
/// units only. Duplicate tags collapse to one.
#[must_use]
pub fn difference_in(from: CalendarDate, to: CalendarDate, units: &[Unit]) -> Difference {
    let (bigger, smaller) = if from >= to { (from, to) } else { (to, from) };
    let millis = elapsed_millis(bigger, smaller);

    // Months back quarters and years as well; computed at most once.
    let mut month_count = None;
    let mut months =
        || *month_count.get_or_insert_with(|| calendar_months_between(bigger, smaller));

    let mut out = Difference::default();
    for unit in units {
        match unit {
            Unit::Milliseconds => out.milliseconds = Some(millis),
            Unit::Seconds => out.seconds = Some(millis / MILLIS_PER_SECOND),
            Unit::Minutes => out.minutes = Some(millis / MILLIS_PER_MINUTE),
            Unit::Hours => out.hours = Some(millis / MILLIS_PER_HOUR),
            Unit::Days => out.days = Some(millis / MILLIS_PER_DAY),
            Unit::Weeks => out.weeks = Some(millis / MILLIS_PER_WEEK),
            Unit::Months => out.months = Some(months()),
            Unit::Quarters => out.quarters = Some(months() / 4),
            Unit::Years => out.years = Some(months() / 12),
        }
    }
    out
}

fn elapsed_millis(bigger: CalendarDate, smaller: CalendarDate) -> u64 {
    let millis = bigger
        .naive()
        .signed_duration_since(smaller.naive())
        .num_milliseconds();
    // bigger >= smaller, so the difference is never negative.
    u64::try_from(millis).unwrap_or_default()
}

/// Counts full calendar months elapsed from `smaller` to `bigger`.
///
/// Whole months come from the year/month fields; the count drops by one
/// when the final partial month is incomplete, which is the case exactly
/// when `bigger`'s (day, time-of-day) has not yet reached `smaller`'s.
fn calendar_months_between(bigger: CalendarDate, smaller: CalendarDate) -> u64 {
    let whole = i64::from(bigger.year()) * 12 + i64::from(bigger.month())
        - (i64::from(smaller.year()) * 12 + i64::from(smaller.month()));
    let last_month_incomplete =
        (bigger.day(), bigger.naive().time()) < (smaller.day(), smaller.naive().time());
    u64::try_from(whole - i64::from(last_month_incomplete)).unwrap_or_default()
}

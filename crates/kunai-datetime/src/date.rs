//! Calendar instants with rollover construction.
//!
//! [`CalendarDate`] is a zone-less wall-clock value. Construction from raw
//! fields normalizes overflow the way calendars roll: month 13 becomes
//! January of the next year, day 32 spills into the next month, day 0 rolls
//! back to the last day of the previous month, hour 25 crosses midnight.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

/// A calendar instant with second precision.
///
/// Equality and ordering are by instant value. Months are 1-based in the
/// public accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDateTime);

impl CalendarDate {
    /// Builds an instant from raw fields, rolling overflow into the next
    /// coarser field (and underflow into the previous one).
    ///
    /// `month` is 1-based; `month == 0` is December of the previous year.
    /// Returns `None` only when the normalized instant falls outside the
    /// representable calendar range.
    #[must_use]
    pub fn from_fields(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> Option<Self> {
        // Linearize year+month so month overflow is plain integer math.
        let months = i64::from(year) * 12 + i64::from(month) - 1;
        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;

        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let date = first.checked_add_signed(TimeDelta::try_days(i64::from(day) - 1)?)?;

        let seconds = i64::from(hour) * 3600 + i64::from(minute) * 60 + i64::from(second);
        let instant = date
            .and_hms_opt(0, 0, 0)?
            .checked_add_signed(TimeDelta::try_seconds(seconds)?)?;
        Some(Self(instant))
    }

    /// Builds a date-only instant (time fields zeroed), with the same
    /// rollover rules as [`Self::from_fields`].
    #[must_use]
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Option<Self> {
        Self::from_fields(year, month, day, 0, 0, 0)
    }

    /// The current wall-clock instant in the host's local timezone.
    #[must_use]
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Shifts the instant by a signed number of calendar months.
    ///
    /// Day-of-month overflow rolls forward, matching calendar rollover:
    /// Jan 31 plus one month lands in early March.
    #[must_use]
    pub fn add_months(self, months: i32) -> Option<Self> {
        let month = i32::try_from(self.month()).ok()?.checked_add(months)?;
        let day = i32::try_from(self.day()).ok()?;
        let hour = i32::try_from(self.hour()).ok()?;
        let minute = i32::try_from(self.minute()).ok()?;
        let second = i32::try_from(self.second()).ok()?;
        Self::from_fields(self.year(), month, day, hour, minute, second)
    }

    /// Shifts the instant backwards by a number of calendar months.
    #[must_use]
    pub fn sub_months(self, months: i32) -> Option<Self> {
        self.add_months(months.checked_neg()?)
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of year, 1..=12.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of month, 1..=31.
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Hour of day, 0..=23.
    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    /// Minute of hour, 0..=59.
    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Second of minute, 0..=59.
    #[must_use]
    pub fn second(self) -> u32 {
        self.0.second()
    }

    /// Milliseconds from the Unix epoch of the wall-clock value.
    #[must_use]
    pub fn timestamp_millis(self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }

    /// 1-based ordinal day within the instant's year.
    ///
    /// The value is derived from the wall-clock fields alone, so a
    /// daylight-saving shift between the year's start and the instant
    /// cannot push it off by a day.
    #[must_use]
    pub fn day_of_year(self) -> u32 {
        self.0.ordinal()
    }

    /// Whether the instant's year is a leap year.
    #[must_use]
    pub fn is_leap_year(self) -> bool {
        is_leap(self.year())
    }

    /// The underlying wall-clock value.
    #[must_use]
    pub fn naive(self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Gregorian leap-year test: divisible by 400, or divisible by 4 and not
/// by 100.
#[must_use]
pub fn is_leap(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// 1-based ordinal day of the current local date.
#[must_use]
pub fn current_day_of_year() -> u32 {
    CalendarDate::now().day_of_year()
}

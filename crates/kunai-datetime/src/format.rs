//! Fixed date and date-time format templates.
//!
//! These are closed enumerations: every layout has a fixed field order and
//! fixed field widths, and nothing else is accepted.

use std::fmt;
use std::str::FromStr;

use crate::error::DateTimeError;

/// Date-only template: two-digit day and month, four-digit year,
/// hyphen-separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `mm-dd-yyyy`
    MonthDayYear,
    /// `dd-mm-yyyy`
    DayMonthYear,
    /// `yyyy-mm-dd`
    YearMonthDay,
}

impl DateFormat {
    /// Returns the template literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MonthDayYear => "mm-dd-yyyy",
            Self::DayMonthYear => "dd-mm-yyyy",
            Self::YearMonthDay => "yyyy-mm-dd",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFormat {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm-dd-yyyy" => Ok(Self::MonthDayYear),
            "dd-mm-yyyy" => Ok(Self::DayMonthYear),
            "yyyy-mm-dd" => Ok(Self::YearMonthDay),
            _ => Err(DateTimeError::UnknownFormat(s.to_string())),
        }
    }
}

/// Date-time template: a [`DateFormat`] layout and an `hh:mm` time portion,
/// space-separated, in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeFormat {
    /// `mm-dd-yyyy hh:mm`
    MonthDayYearHourMinute,
    /// `dd-mm-yyyy hh:mm`
    DayMonthYearHourMinute,
    /// `yyyy-mm-dd hh:mm`
    YearMonthDayHourMinute,
    /// `hh:mm mm-dd-yyyy`
    HourMinuteMonthDayYear,
    /// `hh:mm dd-mm-yyyy`
    HourMinuteDayMonthYear,
    /// `hh:mm yyyy-mm-dd`
    HourMinuteYearMonthDay,
}

impl DateTimeFormat {
    /// Returns the template literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MonthDayYearHourMinute => "mm-dd-yyyy hh:mm",
            Self::DayMonthYearHourMinute => "dd-mm-yyyy hh:mm",
            Self::YearMonthDayHourMinute => "yyyy-mm-dd hh:mm",
            Self::HourMinuteMonthDayYear => "hh:mm mm-dd-yyyy",
            Self::HourMinuteDayMonthYear => "hh:mm dd-mm-yyyy",
            Self::HourMinuteYearMonthDay => "hh:mm yyyy-mm-dd",
        }
    }

    /// The date-portion layout of this template.
    #[must_use]
    pub const fn date_order(self) -> DateFormat {
        match self {
            Self::MonthDayYearHourMinute | Self::HourMinuteMonthDayYear => DateFormat::MonthDayYear,
            Self::DayMonthYearHourMinute | Self::HourMinuteDayMonthYear => DateFormat::DayMonthYear,
            Self::YearMonthDayHourMinute | Self::HourMinuteYearMonthDay => DateFormat::YearMonthDay,
        }
    }

    /// Whether the time portion precedes the date portion.
    #[must_use]
    pub const fn time_first(self) -> bool {
        matches!(
            self,
            Self::HourMinuteMonthDayYear
                | Self::HourMinuteDayMonthYear
                | Self::HourMinuteYearMonthDay
        )
    }
}

impl fmt::Display for DateTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateTimeFormat {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm-dd-yyyy hh:mm" => Ok(Self::MonthDayYearHourMinute),
            "dd-mm-yyyy hh:mm" => Ok(Self::DayMonthYearHourMinute),
            "yyyy-mm-dd hh:mm" => Ok(Self::YearMonthDayHourMinute),
            "hh:mm mm-dd-yyyy" => Ok(Self::HourMinuteMonthDayYear),
            "hh:mm dd-mm-yyyy" => Ok(Self::HourMinuteDayMonthYear),
            "hh:mm yyyy-mm-dd" => Ok(Self::HourMinuteYearMonthDay),
            _ => Err(DateTimeError::UnknownFormat(s.to_string())),
        }
    }
}

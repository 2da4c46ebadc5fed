//! IMF-fixdate rendering (RFC 7231 §7.1.1.1).

use chrono::{Datelike, Weekday};

use crate::date::CalendarDate;

/// Renders the fixed IMF-fixdate form used in HTTP date headers:
/// `"Www, dd Mon yyyy hh:mm:ss GMT"`.
///
/// The instant's fields are rendered verbatim; callers wanting UTC
/// semantics must pass a UTC-normalized instant. Day and month names come
/// from the fixed English tables the RFC prescribes, numeric fields are
/// zero-padded to two digits, and the year is unpadded.
#[must_use]
pub fn to_imf(date: CalendarDate) -> String {
    format!(
        "{weekday}, {day:02} {month} {year} {hour:02}:{minute:02}:{second:02} GMT",
        weekday = weekday_abbrev(date.naive().weekday()),
        day = date.day(),
        month = month_abbrev(date.month()),
        year = date.year(),
        hour = date.hour(),
        minute = date.minute(),
        second = date.second(),
    )
}

const fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

/// `month` is 1-based, as [`CalendarDate::month`] reports it.
const fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

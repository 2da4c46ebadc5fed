//! Fixed-width template parsing.
//!
//! Each template is matched by an explicit byte scanner rather than a
//! general pattern engine: every field has a fixed width, separators are
//! literal, and any deviation (wrong width, stray character, trailing
//! input) is a mismatch.

use crate::date::CalendarDate;
use crate::error::{DateTimeError, DateTimeResult};
use crate::format::{DateFormat, DateTimeFormat};

/// Parses a date string against one of the three date-only templates.
///
/// Field values are taken literally with no range validation: a day of
/// `"32"` is accepted and rolls into the next month per
/// [`CalendarDate::from_fields`]. Time fields are zeroed.
///
/// ## Errors
/// [`DateTimeError::FormatMismatch`] when `text` deviates from the
/// template in any position or length.
pub fn parse_date(text: &str, format: DateFormat) -> DateTimeResult<CalendarDate> {
    let (year, month, day) = scan_date(text, format).ok_or_else(|| mismatch(text, format.as_str()))?;
    CalendarDate::from_ymd(year, month, day).ok_or(DateTimeError::OutOfRange)
}

/// Parses a date-time string against one of the six date-time templates.
///
/// Same contract as [`parse_date`]; seconds are zeroed.
///
/// ## Errors
/// [`DateTimeError::FormatMismatch`] when `text` deviates from the
/// template in any position or length.
pub fn parse_date_time(text: &str, format: DateTimeFormat) -> DateTimeResult<CalendarDate> {
    let (year, month, day, hour, minute) =
        scan_date_time(text, format).ok_or_else(|| mismatch(text, format.as_str()))?;
    CalendarDate::from_fields(year, month, day, hour, minute, 0).ok_or(DateTimeError::OutOfRange)
}

fn mismatch(text: &str, format: &'static str) -> DateTimeError {
    DateTimeError::FormatMismatch {
        text: text.to_string(),
        format,
    }
}

fn scan_date(text: &str, format: DateFormat) -> Option<(i32, i32, i32)> {
    let mut scanner = Scanner::new(text);
    let fields = scan_date_fields(&mut scanner, format)?;
    scanner.finish()?;
    Some(fields)
}

fn scan_date_time(text: &str, format: DateTimeFormat) -> Option<(i32, i32, i32, i32, i32)> {
    let mut scanner = Scanner::new(text);
    let ((year, month, day), (hour, minute)) = if format.time_first() {
        let time = scan_time_fields(&mut scanner)?;
        scanner.literal(b' ')?;
        (scan_date_fields(&mut scanner, format.date_order())?, time)
    } else {
        let date = scan_date_fields(&mut scanner, format.date_order())?;
        scanner.literal(b' ')?;
        (date, scan_time_fields(&mut scanner)?)
    };
    scanner.finish()?;
    Some((year, month, day, hour, minute))
}

/// Scans the date portion in the field order of `format`, returning
/// `(year, month, day)`.
fn scan_date_fields(scanner: &mut Scanner<'_>, format: DateFormat) -> Option<(i32, i32, i32)> {
    match format {
        DateFormat::MonthDayYear => {
            let month = scanner.two_digits()?;
            scanner.literal(b'-')?;
            let day = scanner.two_digits()?;
            scanner.literal(b'-')?;
            let year = scanner.four_digits()?;
            Some((year, month, day))
        }
        DateFormat::DayMonthYear => {
            let day = scanner.two_digits()?;
            scanner.literal(b'-')?;
            let month = scanner.two_digits()?;
            scanner.literal(b'-')?;
            let year = scanner.four_digits()?;
            Some((year, month, day))
        }
        DateFormat::YearMonthDay => {
            let year = scanner.four_digits()?;
            scanner.literal(b'-')?;
            let month = scanner.two_digits()?;
            scanner.literal(b'-')?;
            let day = scanner.two_digits()?;
            Some((year, month, day))
        }
    }
}

/// Scans an `hh:mm` time portion, returning `(hour, minute)`.
fn scan_time_fields(scanner: &mut Scanner<'_>) -> Option<(i32, i32)> {
    let hour = scanner.two_digits()?;
    scanner.literal(b':')?;
    let minute = scanner.two_digits()?;
    Some((hour, minute))
}

/// Byte-position scanner over ASCII template input.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn two_digits(&mut self) -> Option<i32> {
        self.digits(2)
    }

    fn four_digits(&mut self) -> Option<i32> {
        self.digits(4)
    }

    fn digits(&mut self, width: usize) -> Option<i32> {
        let end = self.pos.checked_add(width)?;
        let field = self.bytes.get(self.pos..end)?;
        let mut value: i32 = 0;
        for byte in field {
            if !byte.is_ascii_digit() {
                return None;
            }
            value = value * 10 + i32::from(byte - b'0');
        }
        self.pos = end;
        Some(value)
    }

    fn literal(&mut self, expected: u8) -> Option<()> {
        if self.bytes.get(self.pos) == Some(&expected) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    /// Succeeds only when every input byte has been consumed.
    fn finish(self) -> Option<()> {
        (self.pos == self.bytes.len()).then_some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_month_day_year() {
        let d = parse_date("03-14-2020", DateFormat::MonthDayYear).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2020, 3, 14));
        assert_eq!((d.hour(), d.minute(), d.second()), (0, 0, 0));
    }

    #[test]
    fn parse_date_day_month_year() {
        let d = parse_date("14-03-2020", DateFormat::DayMonthYear).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2020, 3, 14));
    }

    #[test]
    fn parse_date_year_month_day() {
        let d = parse_date("2020-03-14", DateFormat::YearMonthDay).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2020, 3, 14));
    }

    #[test]
    fn parse_date_rejects_wrong_width() {
        // One character short and one long, in the year field.
        assert!(parse_date("03-14-202", DateFormat::MonthDayYear).is_err());
        assert!(parse_date("03-14-20200", DateFormat::MonthDayYear).is_err());
        // One-digit day.
        assert!(parse_date("2020-03-4", DateFormat::YearMonthDay).is_err());
    }

    #[test]
    fn parse_date_rejects_non_digits_and_separators() {
        assert!(parse_date("03/14/2020", DateFormat::MonthDayYear).is_err());
        assert!(parse_date("0a-14-2020", DateFormat::MonthDayYear).is_err());
        assert!(parse_date("", DateFormat::MonthDayYear).is_err());
    }

    #[test]
    fn parse_date_rejects_surrounding_input() {
        assert!(parse_date(" 2020-03-14", DateFormat::YearMonthDay).is_err());
        assert!(parse_date("2020-03-14 ", DateFormat::YearMonthDay).is_err());
    }

    #[test]
    fn parse_date_mismatch_reports_template() {
        let err = parse_date("2020-03-14", DateFormat::MonthDayYear).unwrap_err();
        assert_eq!(
            err,
            DateTimeError::FormatMismatch {
                text: "2020-03-14".to_string(),
                format: "mm-dd-yyyy",
            }
        );
    }

    #[test]
    fn parse_date_takes_fields_literally() {
        // Day 32 rolls into February rather than being rejected.
        let d = parse_date("01-32-2020", DateFormat::MonthDayYear).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2020, 2, 1));
        // Month 00 rolls back to December of the previous year.
        let d = parse_date("2020-00-15", DateFormat::YearMonthDay).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2019, 12, 15));
    }

    #[test]
    fn parse_date_time_date_first() {
        let d =
            parse_date_time("2020-03-14 09:26", DateTimeFormat::YearMonthDayHourMinute).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2020, 3, 14));
        assert_eq!((d.hour(), d.minute(), d.second()), (9, 26, 0));
    }

    #[test]
    fn parse_date_time_time_first() {
        let d =
            parse_date_time("09:26 14-03-2020", DateTimeFormat::HourMinuteDayMonthYear).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2020, 3, 14));
        assert_eq!((d.hour(), d.minute()), (9, 26));
    }

    #[test]
    fn parse_date_time_rejects_wrong_order() {
        assert!(parse_date_time("2020-03-14 09:26", DateTimeFormat::HourMinuteYearMonthDay).is_err());
        assert!(parse_date_time("09:26 2020-03-14", DateTimeFormat::YearMonthDayHourMinute).is_err());
    }

    #[test]
    fn parse_date_time_rejects_malformed_time() {
        assert!(parse_date_time("2020-03-14 9:26", DateTimeFormat::YearMonthDayHourMinute).is_err());
        assert!(parse_date_time("2020-03-14 09.26", DateTimeFormat::YearMonthDayHourMinute).is_err());
    }

    #[test]
    fn all_formats_round_trip_known_date() {
        let rendered: [(&str, DateFormat); 3] = [
            ("03-14-2020", DateFormat::MonthDayYear),
            ("14-03-2020", DateFormat::DayMonthYear),
            ("2020-03-14", DateFormat::YearMonthDay),
        ];
        for (text, format) in rendered {
            let d = parse_date(text, format).unwrap();
            assert_eq!((d.year(), d.month(), d.day()), (2020, 3, 14), "{format}");
        }
    }
}

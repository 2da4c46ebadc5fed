//! Calendar date utilities.
//!
//! Fixed-template date and date-time parsing, IMF-fixdate rendering for
//! HTTP headers (RFC 7231 §7.1.1.1), day-of-year and leap-year facts, and
//! calendar-aware differences between two instants. Every operation is a
//! pure computation; the only ambient input is the host clock behind
//! [`current_day_of_year`] and [`CalendarDate::now`].

mod constants;
mod date;
mod diff;
mod error;
mod format;
mod imf;
mod parse;

pub use date::{CalendarDate, current_day_of_year, is_leap};
pub use diff::{Difference, Unit, difference, difference_in};
pub use error::{DateTimeError, DateTimeResult};
pub use format::{DateFormat, DateTimeFormat};
pub use imf::to_imf;
pub use parse::{parse_date, parse_date_time};

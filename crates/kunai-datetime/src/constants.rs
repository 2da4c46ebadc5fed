//! Millisecond lengths of the fixed-length calendar units.

pub(crate) const MILLIS_PER_SECOND: u64 = 1000;
pub(crate) const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub(crate) const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;
pub(crate) const MILLIS_PER_WEEK: u64 = 7 * MILLIS_PER_DAY;

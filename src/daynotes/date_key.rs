//! # Date Keys
//!
//! Every calendar day is identified by a canonical `DD/MM/YYYY` string, the
//! [`DateKey`]. Notes are stored under these keys, so the format is part of the
//! persisted data and must never drift.
//!
//! Month indexes are zero-based throughout (`0` = January) to match how the
//! month sheet is addressed; the calendar month printed in a key is
//! `month_index + 1`.
//!
//! ## Calendar Arithmetic
//!
//! All computations use the proleptic Gregorian calendar via a day-count
//! (days since 1970-01-01). Nothing here consults the host locale or timezone,
//! so weekday and month names are identical on every platform.
//!
//! - Month length is "day 0 of the next month": the distance between the first
//!   of this month and the first of the next.
//! - Weekdays come from the day-count modulo 7 (1970-01-01 was a Thursday).

use crate::error::{DaynotesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    fn from_days_since_sunday(n: usize) -> Self {
        Self::ALL[n % 7]
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical `DD/MM/YYYY` key for one calendar day.
///
/// A `DateKey` can only be built through [`encode`] or by parsing, so holding
/// one means the day exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(String);

impl DateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `(year, month_index, day)` triple this key names.
    pub fn parts(&self) -> (i32, u32, u32) {
        decode(&self.0).expect("DateKey holds a decodable key")
    }

    pub fn weekday(&self) -> Weekday {
        let (year, month_index, day) = self.parts();
        weekday(year, month_index, day)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DateKey {
    type Err = DaynotesError;

    /// Accepts unpadded components (`5/1/2025`) and normalizes to the
    /// canonical padded form.
    fn from_str(s: &str) -> Result<Self> {
        let (year, month_index, day) = decode(s)?;
        encode(year, month_index, day)
    }
}

impl TryFrom<String> for DateKey {
    type Error = DaynotesError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.0
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date (month is 1-based).
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Number of days in the zero-indexed month. Returns 0 for a month index
/// outside `0..=11`.
pub fn days_in_month(year: i32, month_index: u32) -> u32 {
    if month_index > 11 {
        return 0;
    }
    let year = i64::from(year);
    let month = i64::from(month_index) + 1;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let span = days_from_civil(next_year, next_month, 1) - days_from_civil(year, month, 1);
    span as u32
}

pub fn is_leap_year(year: i32) -> bool {
    days_in_month(year, 1) == 29
}

/// Build the canonical key for a day.
///
/// Fails with [`DaynotesError::InvalidDate`] for a negative year, a month
/// index outside `0..=11`, or a day that does not exist in that month.
pub fn encode(year: i32, month_index: u32, day: u32) -> Result<DateKey> {
    if year < 0 || day == 0 || day > days_in_month(year, month_index) {
        return Err(DaynotesError::InvalidDate {
            year,
            month_index,
            day,
        });
    }
    Ok(DateKey(format!(
        "{:02}/{:02}/{}",
        day,
        month_index + 1,
        year
    )))
}

/// Parse a key back into `(year, month_index, day)`.
///
/// The key must be three `/`-separated runs of ASCII digits naming a day that
/// actually exists; `31/04/2025` is rejected rather than rolled into May.
pub fn decode(key: &str) -> Result<(i32, u32, u32)> {
    let malformed = || DaynotesError::MalformedKey(key.to_string());

    let parts: Vec<&str> = key.split('/').collect();
    if parts.len() != 3 {
        return Err(malformed());
    }
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(malformed());
    }

    let day: u32 = parts[0].parse().map_err(|_| malformed())?;
    let month: u32 = parts[1].parse().map_err(|_| malformed())?;
    let year: i32 = parts[2].parse().map_err(|_| malformed())?;

    if !(1..=12).contains(&month) {
        return Err(malformed());
    }
    let month_index = month - 1;
    if day == 0 || day > days_in_month(year, month_index) {
        return Err(malformed());
    }

    Ok((year, month_index, day))
}

/// Weekday of a day. Days past the end of the month roll forward into the
/// following month, as calendar arithmetic does.
pub fn weekday(year: i32, month_index: u32, day: u32) -> Weekday {
    let year = i64::from(year) + i64::from(month_index / 12);
    let month = i64::from(month_index % 12) + 1;
    let days = days_from_civil(year, month, i64::from(day));
    Weekday::from_days_since_sunday((days + 4).rem_euclid(7) as usize)
}

pub fn weekday_name(year: i32, month_index: u32, day: u32) -> &'static str {
    weekday(year, month_index, day).name()
}

pub fn is_sunday(year: i32, month_index: u32, day: u32) -> bool {
    weekday(year, month_index, day) == Weekday::Sunday
}

pub fn is_weekend(year: i32, month_index: u32, day: u32) -> bool {
    weekday(year, month_index, day).is_weekend()
}

/// Full English month name, or `None` for an index outside `0..=11`.
pub fn month_name(month_index: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month_index as usize).copied()
}

/// Display label for a month, e.g. `"January 2025"`.
pub fn month_label(year: i32, month_index: u32) -> String {
    match month_name(month_index) {
        Some(name) => format!("{} {}", name, year),
        None => format!("Month {} {}", month_index + 1, year),
    }
}

use chrono::{Datelike, NaiveDate, Weekday};

use super::HolidayError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns true if `raw` has the shape `YYYY-MM-DD` (digits, zero-padded).
///
/// Only the shape is checked; `2025-02-30` passes.
pub fn is_canonical_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a canonical `YYYY-MM-DD` date string into a calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, HolidayError> {
    let raw = raw.trim();
    if !is_canonical_date(raw) {
        return Err(HolidayError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| HolidayError::InvalidDate(raw.to_string()))
}

/// Day-of-week index, 0 = Monday through 6 = Sunday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Returns true for Saturdays and Sundays.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Language used to render weekday names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeekdayLocale {
    #[default]
    German,
    English,
}

const GERMAN_WEEKDAYS: [&str; 7] = [
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
    "Sonntag",
];

const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

impl WeekdayLocale {
    /// Parses a language tag such as `de` or `en-US`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match language.as_str() {
            "de" => Some(WeekdayLocale::German),
            "en" => Some(WeekdayLocale::English),
            _ => None,
        }
    }

    /// Renders the weekday of `date` in this locale.
    pub fn weekday_name(self, date: NaiveDate) -> &'static str {
        let names = match self {
            WeekdayLocale::German => &GERMAN_WEEKDAYS,
            WeekdayLocale::English => &ENGLISH_WEEKDAYS,
        };
        names[usize::from(weekday_index(date))]
    }
}

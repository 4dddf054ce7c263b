//! Result payloads of the holiday engine operations.
//!
//! Field names serialize in camelCase to match the public JSON API.

use chrono::NaiveDate;
use serde::Serialize;

use super::region::RegionScope;
use super::types::CountryCode;

/// A holiday as reported to callers, with its rendered weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayView {
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub day_of_week: &'static str,
}

/// Holidays of one country and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayList {
    pub country: String,
    pub country_code: CountryCode,
    pub year: i32,
    pub state: RegionScope,
    pub holidays: Vec<HolidayView>,
    pub count: usize,
}

/// Name and classification of a matched holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidaySummary {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Answer to "is this date a holiday".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayCheck {
    pub date: NaiveDate,
    pub is_holiday: bool,
    pub holiday: Option<HolidaySummary>,
    pub day_of_week: &'static str,
}

/// The next holiday after a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingHoliday {
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub day_of_week: &'static str,
    pub days_until: i64,
}

/// Day classification totals for an inclusive date range.
///
/// `business_days + weekend_days + holiday_days == total_days` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDayCount {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub country: String,
    pub state: RegionScope,
    pub business_days: u32,
    pub total_days: u32,
    pub weekend_days: u32,
    pub holiday_days: u32,
}

/// Declared region codes of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionList {
    pub country: String,
    pub country_code: CountryCode,
    pub states: Vec<String>,
}

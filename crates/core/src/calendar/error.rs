use chrono::NaiveDate;
use thiserror::Error;

use crate::store::StoreError;

/// Errors returned by holiday engine operations.
///
/// Every variant except `Dataset` describes bad input and is recoverable by
/// the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HolidayError {
    #[error("Invalid country code: {0}")]
    UnknownCountry(String),
    #[error("No data available for year {year}. Available: {available}")]
    YearNotAvailable { year: i32, available: String },
    #[error("Start date must be before end date ({start} > {end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("No upcoming holidays found")]
    NoUpcomingHoliday,
    #[error("Invalid date format. Use YYYY-MM-DD (got {0:?})")]
    InvalidDate(String),
    #[error("Date range spans {days} days (max: {max})")]
    RangeTooLarge { days: i64, max: u32 },
    #[error("Holiday data for {country} is unavailable: {reason}")]
    Dataset { country: String, reason: String },
}

impl From<StoreError> for HolidayError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { country } => HolidayError::UnknownCountry(country),
            StoreError::Unreadable { country, reason }
            | StoreError::Malformed { country, reason } => HolidayError::Dataset { country, reason },
        }
    }
}

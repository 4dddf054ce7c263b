//! Parameter checks shared by the API handlers.

use chrono::NaiveDate;
use feiertag_core::calendar::{parse_date, CountryCode};

use super::error::RequestError;
use crate::state::AppState;

/// Resolves a raw country parameter against the served countries.
pub fn resolve_country(state: &AppState, raw: &str) -> Result<CountryCode, RequestError> {
    CountryCode::parse(raw)
        .ok()
        .filter(|code| state.supported_country(code))
        .ok_or_else(|| RequestError::UnsupportedCountry {
            supported: state.supported_list(),
        })
}

/// Parses a `YYYY-MM-DD` parameter.
pub fn request_date(raw: &str) -> Result<NaiveDate, RequestError> {
    parse_date(raw).map_err(|_| RequestError::InvalidDate)
}

pub fn request_year(raw: &str) -> Result<i32, RequestError> {
    raw.trim()
        .parse()
        .map_err(|_| RequestError::InvalidYear(raw.to_string()))
}

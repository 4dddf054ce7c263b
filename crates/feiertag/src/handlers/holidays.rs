//! Holiday lookup handlers.
//!
//! These handlers validate query parameters and run the `HolidayEngine`
//! through `AppState::query`.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use feiertag_core::{
    calendar::{HolidayCheck, HolidayList, RegionScope, UpcomingHoliday},
    serde::deserialize_optional_string,
};
use serde::Deserialize;
use serde_json::json;

use super::{
    envelope::Envelope,
    error::RequestError,
    validation::{request_date, request_year, resolve_country},
};
use crate::{handlers::AppError, state::AppState};

/// Query parameters for listing holidays.
#[derive(Debug, Deserialize)]
pub struct HolidaysQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,
    /// Defaults to the current year.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,
}

/// Query parameters for checking a single date.
#[derive(Debug, Deserialize)]
pub struct IsHolidayQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,
}

/// Query parameters for finding the next holiday.
#[derive(Debug, Deserialize)]
pub struct NextHolidayQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,
    /// Reference date, defaults to today.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,
}

/// List holidays for a country and year (GET /api/holidays).
pub async fn list_holidays(
    State(state): State<AppState>,
    query: Result<Query<HolidaysQuery>, QueryRejection>,
) -> Result<Json<Envelope<HolidayList>>, AppError> {
    let Query(query) = query.map_err(|e| RequestError::InvalidQuery(e.body_text()))?;
    let Some(country) = query.country.as_deref() else {
        return Err(RequestError::Missing {
            message: "Missing required parameter: country",
            usage: json!("GET /api/holidays?country=de&year=2025&state=BY"),
        }
        .into());
    };
    let country = resolve_country(&state, country)?;
    let year = query.year.as_deref().map(request_year).transpose()?;
    let scope = RegionScope::from_param(query.state.as_deref());

    let list = state
        .query(move |engine| engine.list_holidays(&country, year, &scope))
        .await?;

    Ok(Json(Envelope::new(list, "/api/holidays")))
}

/// Check whether a date is a holiday (GET /api/is-holiday).
pub async fn is_holiday(
    State(state): State<AppState>,
    query: Result<Query<IsHolidayQuery>, QueryRejection>,
) -> Result<Json<Envelope<HolidayCheck>>, AppError> {
    let Query(query) = query.map_err(|e| RequestError::InvalidQuery(e.body_text()))?;
    let (Some(country), Some(date)) = (query.country.as_deref(), query.date.as_deref()) else {
        return Err(RequestError::Missing {
            message: "Missing required parameters: country, date",
            usage: json!("GET /api/is-holiday?country=de&date=2025-01-01&state=BY"),
        }
        .into());
    };
    let country = resolve_country(&state, country)?;
    let date = request_date(date)?;
    let scope = RegionScope::from_param(query.state.as_deref());

    let check = state
        .query(move |engine| engine.is_holiday(&country, date, &scope))
        .await?;

    Ok(Json(Envelope::new(check, "/api/is-holiday")))
}

/// Find the next holiday after a date (GET /api/next-holiday).
pub async fn next_holiday(
    State(state): State<AppState>,
    query: Result<Query<NextHolidayQuery>, QueryRejection>,
) -> Result<Json<Envelope<UpcomingHoliday>>, AppError> {
    let Query(query) = query.map_err(|e| RequestError::InvalidQuery(e.body_text()))?;
    let Some(country) = query.country.as_deref() else {
        return Err(RequestError::Missing {
            message: "Missing required parameter: country",
            usage: json!("GET /api/next-holiday?country=de&state=BY"),
        }
        .into());
    };
    let country = resolve_country(&state, country)?;
    let from = query.from.as_deref().map(request_date).transpose()?;
    let scope = RegionScope::from_param(query.state.as_deref());

    let next = state
        .query(move |engine| engine.next_holiday(&country, from, &scope))
        .await?;

    Ok(Json(Envelope::new(next, "/api/next-holiday")))
}

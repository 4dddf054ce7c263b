use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use feiertag_core::{
    calendar::{BusinessDayCount, RegionScope},
    serde::deserialize_optional_string,
};
use serde::Deserialize;
use serde_json::json;

use super::{
    envelope::Envelope,
    error::RequestError,
    validation::{request_date, resolve_country},
};
use crate::{handlers::AppError, state::AppState};

/// JSON body for business-day calculations.
#[derive(Debug, Deserialize)]
pub struct BusinessDaysRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,
    /// First day of the range (inclusive).
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub start: Option<String>,
    /// Last day of the range (inclusive).
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,
}

/// Count business days in a date range (POST /api/businessdays).
pub async fn count_business_days(
    State(state): State<AppState>,
    body: Result<Json<BusinessDaysRequest>, JsonRejection>,
) -> Result<Json<Envelope<BusinessDayCount>>, AppError> {
    let Json(request) = body.map_err(|e| RequestError::InvalidBody(e.body_text()))?;

    let (Some(country), Some(start), Some(end)) = (
        request.country.as_deref(),
        request.start.as_deref(),
        request.end.as_deref(),
    ) else {
        return Err(RequestError::Missing {
            message: "Missing required fields: country, start, end",
            usage: json!({
                "method": "POST",
                "endpoint": "/api/businessdays",
                "body": {
                    "country": "de",
                    "start": "2025-01-01",
                    "end": "2025-12-31",
                    "state": "BY (optional)"
                }
            }),
        }
        .into());
    };
    let country = resolve_country(&state, country)?;
    let start = request_date(start)?;
    let end = request_date(end)?;
    let scope = RegionScope::from_param(request.state.as_deref());

    let count = state
        .query(move |engine| engine.business_days(&country, start, end, &scope))
        .await?;

    Ok(Json(Envelope::new(count, "/api/businessdays")))
}

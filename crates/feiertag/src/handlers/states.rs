use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use feiertag_core::{calendar::RegionList, serde::deserialize_optional_string};
use serde::Deserialize;
use serde_json::json;

use super::{envelope::Envelope, error::RequestError, validation::resolve_country};
use crate::{handlers::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct StatesQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,
}

/// List the regions of a country (GET /api/states).
pub async fn list_states(
    State(state): State<AppState>,
    query: Result<Query<StatesQuery>, QueryRejection>,
) -> Result<Json<Envelope<RegionList>>, AppError> {
    let Query(query) = query.map_err(|e| RequestError::InvalidQuery(e.body_text()))?;
    let Some(country) = query.country.as_deref() else {
        return Err(RequestError::Missing {
            message: "Missing required parameter: country",
            usage: json!("GET /api/states?country=de"),
        }
        .into());
    };
    let country = resolve_country(&state, country)?;

    let regions = state
        .query(move |engine| engine.get_regions(&country))
        .await?;

    Ok(Json(Envelope::new(regions, "/api/states")))
}

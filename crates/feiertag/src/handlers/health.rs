//! Liveness probe.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Datasets are loaded lazily and do not affect it.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

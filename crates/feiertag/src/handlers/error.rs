use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use feiertag_core::calendar::{holiday_error_to_status_code, HolidayError};
use serde_json::{json, Value};

/// Request validation failures detected before the engine runs.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// A required parameter is absent; `usage` shows a well-formed request.
    #[error("{message}")]
    Missing { message: &'static str, usage: Value },
    #[error("Invalid country code. Supported: {supported}")]
    UnsupportedCountry { supported: String },
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,
    #[error("Invalid year: {0}")]
    InvalidYear(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if self.0.downcast_ref::<RequestError>().is_some() {
            StatusCode::BAD_REQUEST
        } else if let Some(holiday_error) = self.0.downcast_ref::<HolidayError>() {
            let code = holiday_error_to_status_code(holiday_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();

        let body = if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "API error");
            json!({ "error": "Internal server error", "message": message })
        } else {
            tracing::warn!(status = %status, message = %message, "API error");
            match self.0.downcast_ref::<RequestError>() {
                Some(RequestError::Missing { usage, .. }) => {
                    json!({ "error": message, "usage": usage })
                }
                _ => json!({ "error": message }),
            }
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_missing_parameter_includes_usage() {
        let err = AppError::from(RequestError::Missing {
            message: "Missing required parameter: country",
            usage: json!("GET /api/states?country=de"),
        });

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required parameter: country");
        assert_eq!(body["usage"], "GET /api/states?country=de");
    }

    #[tokio::test]
    async fn test_holiday_error_uses_status_mapping() {
        let (status, body) = render(AppError::from(HolidayError::NoUpcomingHoliday)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "No upcoming holidays found" }));
    }

    #[tokio::test]
    async fn test_dataset_fault_is_internal_error() {
        let err = AppError::from(HolidayError::Dataset {
            country: "de".to_string(),
            reason: "truncated file".to_string(),
        });

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(
            body["message"],
            "Holiday data for de is unavailable: truncated file"
        );
    }

    #[tokio::test]
    async fn test_unknown_error_is_internal_error() {
        let (status, body) = render(AppError(anyhow::anyhow!("boom"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "boom");
    }
}

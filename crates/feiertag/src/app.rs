use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        business_days::count_business_days,
        health::livez,
        holidays::{is_holiday, list_holidays, next_holiday},
        methods::{method_not_allowed, post_only},
        states::list_states,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-api-key")]);

    let api_routes = Router::new()
        .route(
            "/holidays",
            get(list_holidays).fallback(method_not_allowed),
        )
        .route(
            "/is-holiday",
            get(is_holiday).fallback(method_not_allowed),
        )
        .route(
            "/next-holiday",
            get(next_holiday).fallback(method_not_allowed),
        )
        .route("/states", get(list_states).fallback(method_not_allowed))
        .route(
            "/businessdays",
            post(count_business_days).fallback(post_only),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

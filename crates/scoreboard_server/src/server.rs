use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use scoreboard::{Roster, ThresholdQuery, ThresholdResult, ValidationError, above_threshold};
use serde_json::json;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Roster>,
}

impl AppState {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }
}

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let landing_page = ServeFile::new(config.pages_dir.join("index.html"));
    let static_service = ServeDir::new(config.static_dir.clone());

    Router::new()
        .route("/students/above-threshold", post(students_above_threshold))
        .route_service("/", landing_page)
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// The body is taken as raw bytes so that a missing body or a non-JSON
// content type is reported with the same 400 as a missing field.
async fn students_above_threshold(
    state: State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> std::result::Result<Json<ThresholdResult>, ApiError> {
    let state = state.0;
    if !is_json_content_type(&headers) {
        return Err(ApiError::bad_request(ValidationError::Required));
    }
    let query = ThresholdQuery::from_slice(&body).map_err(ApiError::bad_request)?;
    let result = above_threshold(&state.roster, &query);
    tracing::debug!(
        threshold = query.threshold(),
        count = result.count(),
        "answered threshold query"
    );
    Ok(Json(result))
}

/// Accepts `application/json` and `application/*+json`, with or without
/// parameters such as `charset`.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(err: ValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

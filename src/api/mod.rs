//! REST API
//!
//! ```text
//! GET    /health
//! POST   /functions/v1/cosmic-match
//! POST   /functions/v1/qimen-oracle
//! GET    /api/calendar/insight
//! GET    /api/calendar/week
//! GET    /api/calendar/month
//! ```
//!
//! Every route answers `OPTIONS` preflight with an empty body, and every
//! response carries the same permissive CORS headers.

pub mod calendar_routes;
pub mod error;
pub mod reading_routes;

pub use error::{ApiError, ErrorResponse};
pub use reading_routes::FALLBACK_HEADER;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::gateway::ChatGateway;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ChatGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self { gateway }
    }
}

/// Request headers the browser client sends alongside its calls.
const ALLOWED_HEADERS: [HeaderName; 4] = [
    header::AUTHORIZATION,
    HeaderName::from_static("x-client-info"),
    HeaderName::from_static("apikey"),
    header::CONTENT_TYPE,
];

/// Answers preflight and stamps the allowed origin on every response.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS)
        .expose_headers([FALLBACK_HEADER])
}

/// `CorsLayer` only lists allowed headers on preflight; the browser client
/// expects them on every response, errors included.
pub fn allow_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("authorization, x-client-info, apikey, content-type"),
    )
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.gateway.model_name(),
    }))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/functions/v1/cosmic-match",
            post(reading_routes::cosmic_match),
        )
        .route(
            "/functions/v1/qimen-oracle",
            post(reading_routes::qimen_oracle),
        )
        .route("/api/calendar/insight", get(calendar_routes::insight))
        .route("/api/calendar/week", get(calendar_routes::week))
        .route("/api/calendar/month", get(calendar_routes::month))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(allow_headers_layer())
                .layer(cors_layer()),
        )
        .with_state(state)
}

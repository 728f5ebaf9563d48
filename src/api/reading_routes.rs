//! AI-backed reading endpoints
//!
//! - `POST /functions/v1/cosmic-match`
//! - `POST /functions/v1/qimen-oracle`
//!
//! Bodies are read as raw bytes and parsed by hand so that a malformed body
//! is reported through [`ApiError`] like every other failure.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Json, Response},
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use super::{error::ApiError, AppState};
use crate::matcher::{self, MatchRequest};
use crate::oracle::{self, OracleRequest};
use crate::reading::Reading;

/// Set on responses carrying the fixed fallback instead of model output.
pub const FALLBACK_HEADER: HeaderName = HeaderName::from_static("x-cosmic-fallback");

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

fn reading_response<T: Serialize>(reading: Reading<T>) -> Response {
    if reading.is_fallback() {
        (
            [(FALLBACK_HEADER, HeaderValue::from_static("true"))],
            Json(reading),
        )
            .into_response()
    } else {
        Json(reading).into_response()
    }
}

/// POST /functions/v1/cosmic-match
pub async fn cosmic_match(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request: MatchRequest = parse_body(&body)?;
    let span = tracing::info_span!("cosmic_match", request_id = %Uuid::new_v4());

    let reading = matcher::cosmic_match(state.gateway.as_ref(), &request)
        .instrument(span)
        .await?;
    Ok(reading_response(reading))
}

/// POST /functions/v1/qimen-oracle
pub async fn qimen_oracle(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request: OracleRequest = parse_body(&body)?;
    let span = tracing::info_span!("qimen_oracle", request_id = %Uuid::new_v4());

    let reading = oracle::qimen_oracle(state.gateway.as_ref(), &request)
        .instrument(span)
        .await?;
    Ok(reading_response(reading))
}

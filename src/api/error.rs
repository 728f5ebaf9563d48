//! HTTP error mapping
//!
//! Every failure leaves the service as `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::CalendarError;
use crate::gateway::GatewayError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Request body was not the expected JSON.
    #[error("{0}")]
    InvalidBody(String),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("{0}")]
    BadQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Gateway(GatewayError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Gateway(GatewayError::CreditsDepleted) => StatusCode::PAYMENT_REQUIRED,
            // unreadable bodies share the catch-all 500 with upstream failures
            ApiError::Gateway(_) | ApiError::InvalidBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Calendar(_) | ApiError::BadQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::warn!("request rejected ({}): {}", status.as_u16(), self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(GatewayError::RateLimited).status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::from(GatewayError::CreditsDepleted).status(),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(
            ApiError::from(GatewayError::MissingApiKey).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(GatewayError::from_status(500, String::new())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::InvalidBody("EOF while parsing".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::BadQuery("bad date".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages_pass_through() {
        assert_eq!(
            ApiError::from(GatewayError::CreditsDepleted).to_string(),
            "AI credits depleted. Please add credits to continue."
        );
    }
}

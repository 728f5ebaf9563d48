//! Failures talking to the AI gateway.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("LOVABLE_API_KEY is not configured")]
    MissingApiKey,

    /// Upstream answered 429.
    #[error("Rate limits exceeded, please try again later.")]
    RateLimited,

    /// Upstream answered 402.
    #[error("AI credits depleted. Please add credits to continue.")]
    CreditsDepleted,

    #[error("AI gateway error: {status}")]
    Status { status: u16, body: String },

    #[error("AI gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The completion envelope itself was not JSON.
    #[error("AI gateway returned an unreadable response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Map a non-success upstream status into the matching variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            429 => GatewayError::RateLimited,
            402 => GatewayError::CreditsDepleted,
            _ => GatewayError::Status { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(
            GatewayError::from_status(429, String::new()),
            GatewayError::RateLimited
        ));
        assert!(matches!(
            GatewayError::from_status(402, String::new()),
            GatewayError::CreditsDepleted
        ));
        let err = GatewayError::from_status(503, "overloaded".into());
        assert_eq!(err.to_string(), "AI gateway error: 503");
    }

    #[test]
    fn test_missing_key_message() {
        assert_eq!(
            GatewayError::MissingApiKey.to_string(),
            "LOVABLE_API_KEY is not configured"
        );
    }
}

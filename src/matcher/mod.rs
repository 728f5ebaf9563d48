//! Cosmic compatibility matcher
//!
//! Two people's birth data go to the model with a Bazi + synastry prompt;
//! the answer is a [`MatchResult`].

pub mod prompt;
pub mod types;

pub use prompt::build_prompts;
pub use types::{ConnectionType, ElementalAlchemy, MatchRequest, MatchResult, PartnerProfile};

use crate::gateway::{ChatGateway, GatewayError};
use crate::reading::{cast_reading, or_unknown, Reading};

/// Produce a compatibility reading for `request`.
pub async fn cosmic_match(
    gateway: &dyn ChatGateway,
    request: &MatchRequest,
) -> Result<Reading<MatchResult>, GatewayError> {
    tracing::info!(
        "Analyzing cosmic compatibility for: {} and {}",
        or_unknown(request.user_a.as_ref().and_then(|p| p.name.as_ref())),
        or_unknown(request.user_b.as_ref().and_then(|p| p.name.as_ref())),
    );

    let prompts = build_prompts(request);
    cast_reading(gateway, "cosmic-match", &prompts, MatchResult::fallback).await
}

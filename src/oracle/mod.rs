//! Strategic oracle (Qimen Dun Jia)
//!
//! The chart itself is cast by the model; this module builds the prompt and
//! owns the fixed fallback chart.

pub mod fallback;
pub mod prompt;
pub mod types;

pub use fallback::fallback_reading;
pub use prompt::build_prompts;
pub use types::{Element, OracleMode, OracleRequest, Palace, QimenReading, Strength, Verdict};

use chrono::Utc;

use crate::gateway::{ChatGateway, GatewayError};
use crate::reading::{cast_reading, or_unknown, Reading};

/// Cast a chart for `request`.
pub async fn qimen_oracle(
    gateway: &dyn ChatGateway,
    request: &OracleRequest,
) -> Result<Reading<QimenReading>, GatewayError> {
    tracing::info!(
        "Casting QMDJ chart for question: {}",
        or_unknown(request.question.as_ref())
    );
    tracing::info!("Mode: {:?}", request.mode());
    tracing::info!("Timestamp: {:?}", request.timestamp);

    let prompts = build_prompts(request, Utc::now());
    cast_reading(gateway, "qimen-oracle", &prompts, fallback_reading).await
}

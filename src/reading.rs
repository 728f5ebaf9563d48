//! Prompt → gateway → parse-or-fallback
//!
//! Both AI-backed endpoints share one flow:
//!
//! ```text
//! PromptPair ──► ChatGateway::complete ──► fence extraction ──► serde_json
//!                      │                                           │
//!                      └── GatewayError (429 / 402 / 500)          ├─ Ok  → Reading::Upstream
//!                                                                  └─ Err → Reading::Fallback
//! ```
//!
//! Upstream JSON is passed through untouched. It is also checked against
//! the typed schema, but a mismatch is only logged.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::gateway::{parse_json_payload, ChatGateway, GatewayError};

/// System + user prompt sent as one chat turn.
#[derive(Debug, Clone)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

impl PromptPair {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// A reading ready to be returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reading<T> {
    /// Parsed model output, unchanged.
    Upstream(Value),
    /// Fixed content substituted for unparseable output.
    Fallback(T),
}

impl<T> Reading<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Reading::Fallback(_))
    }
}

/// Prompt text for a loosely-typed request field.
///
/// Strings are used as-is and any other JSON value in its compact form.
/// `None` for absent, `null` or blank strings.
pub fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// [`field_text`], or `Unknown`.
pub fn or_unknown(value: Option<&Value>) -> String {
    field_text(value).unwrap_or_else(|| "Unknown".to_string())
}

/// Run one reading through the gateway.
///
/// Gateway failures propagate; anything that makes it back as content but
/// does not parse as JSON turns into `fallback()`.
pub async fn cast_reading<T, F>(
    gateway: &dyn ChatGateway,
    kind: &str,
    prompts: &PromptPair,
    fallback: F,
) -> Result<Reading<T>, GatewayError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    tracing::debug!(model = gateway.model_name(), "casting {} reading", kind);

    let content = gateway.complete(&prompts.system, &prompts.user).await?;
    tracing::debug!("Raw AI response: {:?}", content);

    let Some(content) = content else {
        tracing::warn!("{}: AI response had no content, serving fallback", kind);
        return Ok(Reading::Fallback(fallback()));
    };

    match parse_json_payload(&content) {
        Ok(value) => {
            if let Err(e) = serde_json::from_value::<T>(value.clone()) {
                tracing::warn!("{}: AI response does not match the expected schema: {}", kind, e);
            }
            Ok(Reading::Upstream(value))
        }
        Err(e) => {
            tracing::warn!("{}: JSON parse error: {}, serving fallback", kind, e);
            Ok(Reading::Fallback(fallback()))
        }
    }
}

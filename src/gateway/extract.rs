//! Pulling a JSON document out of model output
//!
//! Models are told to answer with bare JSON but routinely wrap it in a
//! markdown fence anyway. The first fenced block wins; without a fence the
//! whole content is parsed.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// A ``` fence, optionally tagged `json`, capturing its body lazily.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").unwrap());

/// Return the JSON candidate inside `content`, trimmed.
pub fn json_candidate(content: &str) -> &str {
    FENCE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(content)
        .trim()
}

/// Parse the JSON candidate inside `content`.
pub fn parse_json_payload(content: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(json_candidate(content))
}

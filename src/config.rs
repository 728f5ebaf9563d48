//! Service configuration
//!
//! Everything is read from environment variables (a `.env` file is honoured
//! by the binary via `dotenvy`):
//!
//! | Variable                  | Default                                              |
//! |---------------------------|------------------------------------------------------|
//! | `LOVABLE_API_KEY`         | none, requests fail with 500 until set               |
//! | `AI_GATEWAY_URL`          | `https://ai.gateway.lovable.dev/v1/chat/completions` |
//! | `AI_GATEWAY_MODEL`        | `google/gemini-2.5-flash`                            |
//! | `AI_GATEWAY_TIMEOUT_SECS` | `60`                                                 |
//! | `COSMIC_BIND_ADDR`        | `0.0.0.0:3000`                                       |

use std::time::Duration;

use anyhow::{Context, Result};

pub const API_KEY_VAR: &str = "LOVABLE_API_KEY";
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for the upstream chat-completion gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bearer key. Kept optional so the server can start without it; a
    /// missing key is reported per request.
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Build a config pointing at `endpoint` with the default model.
    pub fn new(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty());
        let endpoint =
            std::env::var("AI_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let model = std::env::var("AI_GATEWAY_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout_secs = match std::env::var("AI_GATEWAY_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("AI_GATEWAY_TIMEOUT_SECS is not a number: {raw}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        if api_key.is_none() {
            tracing::warn!("{} is not set; AI-backed endpoints will return 500", API_KEY_VAR);
        }

        Ok(Self {
            api_key,
            endpoint,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("COSMIC_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

//! AI gateway HTTP client
//!
//! Speaks the OpenAI-style `/v1/chat/completions` protocol exposed by the
//! gateway.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::{ChatGateway, GatewayError};
use crate::config::GatewayConfig;

/// reqwest-backed [`ChatGateway`].
#[derive(Clone)]
pub struct GatewayHttpClient {
    config: GatewayConfig,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<Value>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<Message>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Option<Vec<Choice>>,
}

impl GatewayHttpClient {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    fn request_body(&self, system_prompt: &str, user_prompt: &str) -> Value {
        serde_json::json!({
            "model": &self.config.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt}
            ]
        })
    }
}

/// First choice's content, if it is a string.
fn first_content(response: CompletionResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .flatten()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .and_then(|content| match content {
            Value::String(text) => Some(text),
            _ => None,
        })
}

#[async_trait]
impl ChatGateway for GatewayHttpClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Option<String>, GatewayError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingApiKey)?;

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&self.request_body(system_prompt, user_prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("AI gateway error: {} {}", status.as_u16(), body);
            return Err(GatewayError::from_status(status.as_u16(), body));
        }

        let text = response.text().await?;
        let parsed: CompletionResponse = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                "AI gateway returned non-JSON envelope: {}",
                text.chars().take(500).collect::<String>()
            );
            GatewayError::Decode(e.to_string())
        })?;

        Ok(first_content(parsed))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

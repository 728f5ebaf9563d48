//! Chat gateway trait
//!
//! Handlers only need "system + user prompt in, assistant text out". The
//! HTTP implementation lives in [`super::http_client`]; tests plug in stubs.

use async_trait::async_trait;

use super::GatewayError;

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send one system/user prompt pair and return the first choice's
    /// message content.
    ///
    /// `Ok(None)` means the upstream answered successfully but carried no
    /// textual content (no choices, null content, non-string content).
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Option<String>, GatewayError>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}

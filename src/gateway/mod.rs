//! AI gateway access
//!
//! - [`ChatGateway`]: prompt pair in, assistant text out
//! - [`GatewayHttpClient`]: the reqwest implementation
//! - [`extract`]: markdown-fence aware JSON extraction

pub mod client;
pub mod error;
pub mod extract;
pub mod http_client;

pub use client::ChatGateway;
pub use error::GatewayError;
pub use extract::{json_candidate, parse_json_payload};
pub use http_client::GatewayHttpClient;

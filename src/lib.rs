//! Cosmic Oracle - backend for the cosmic dashboard
//!
//! Serves three things over HTTP:
//!
//! - `POST /functions/v1/cosmic-match`: two-person compatibility reading,
//!   delegated to the AI gateway
//! - `POST /functions/v1/qimen-oracle`: nine-palace Qimen Dun Jia chart,
//!   delegated to the AI gateway
//! - `GET /api/calendar/*`: static auspicious/challenging day tables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cosmic_oracle::api::{create_router, AppState};
//! use cosmic_oracle::config::GatewayConfig;
//! use cosmic_oracle::gateway::GatewayHttpClient;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = GatewayConfig::from_env()?;
//! let gateway = Arc::new(GatewayHttpClient::new(config)?);
//! let app = create_router(AppState::new(gateway));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

// Environment-driven settings
pub mod config;

// Upstream chat-completion client and JSON extraction
pub mod gateway;

// Reading domains
pub mod calendar;
pub mod matcher;
pub mod oracle;

// Shared proxy flow: prompt -> gateway -> parse-or-fallback
pub mod reading;

// HTTP surface
pub mod api;

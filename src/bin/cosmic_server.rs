//! Cosmic Oracle API server
//!
//! ## Usage
//!
//! ```bash
//! LOVABLE_API_KEY=... cargo run --bin cosmic_server
//!
//! curl -X POST http://localhost:3000/functions/v1/cosmic-match \
//!   -H "Content-Type: application/json" \
//!   -d '{"userA": {"name": "You", "birthDate": "1990-01-15"},
//!        "userB": {"name": "Sam", "birthDate": "1988-05-02"}}'
//!
//! curl -X POST http://localhost:3000/functions/v1/qimen-oracle \
//!   -H "Content-Type: application/json" \
//!   -d '{"question": "Should I launch this month?", "mode": "divination"}'
//!
//! curl "http://localhost:3000/api/calendar/week?date=2026-10-16"
//! ```

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use cosmic_oracle::api::{create_router, AppState};
use cosmic_oracle::config::{GatewayConfig, ServerConfig};
use cosmic_oracle::gateway::GatewayHttpClient;

#[derive(Parser, Debug)]
#[command(name = "cosmic_server", about = "Cosmic Oracle API server")]
struct Args {
    /// Listen address
    #[arg(long, env = "COSMIC_BIND_ADDR")]
    bind: Option<String>,

    /// Model requested from the AI gateway
    #[arg(long, env = "AI_GATEWAY_MODEL")]
    model: Option<String>,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cosmic_oracle=debug,cosmic_server=info,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();

    let mut gateway_config = GatewayConfig::from_env()?;
    if let Some(model) = args.model {
        gateway_config = gateway_config.with_model(model);
    }
    let server_config = ServerConfig::from_env();
    let bind_addr = args.bind.unwrap_or(server_config.bind_addr);

    tracing::info!(
        "AI gateway: {} (model {})",
        gateway_config.endpoint,
        gateway_config.model
    );
    let gateway = Arc::new(GatewayHttpClient::new(gateway_config)?);
    let app = create_router(AppState::new(gateway));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    tracing::info!("cosmic_server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

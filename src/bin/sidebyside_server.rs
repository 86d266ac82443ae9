//! Side By Side Server
//!
//! Serves the resolver over HTTP. Reads config from
//! `SIDEBYSIDE_CONFIG` (default `config/sidebyside.yaml`) and env vars:
//!   SIDEBYSIDE_BIND_ADDR         — listen address (default: 0.0.0.0:8080)
//!   SIDEBYSIDE_API_BASE          — MediaWiki api.php endpoint
//!   SIDEBYSIDE_LOOKUP_TIMEOUT_MS — per-lookup bound
//!   SIDEBYSIDE_QUOTE_MODE        — boundary | positional

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sidebyside::{
    server::{build_router, AppState},
    EntityResolver, ResolverOptions, SideBySideConfig, WikipediaClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sidebyside=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Side By Side server");

    let config = SideBySideConfig::load().context("Failed to load configuration")?;

    tracing::info!(
        api_base = %config.lookup.api_base,
        quote_mode = ?config.resolver.quote_mode,
        lookup_timeout_ms = config.resolver.lookup_timeout_ms,
        "Configuration loaded"
    );

    let lookup = Arc::new(WikipediaClient::new(&config.lookup)?);
    let resolver = EntityResolver::new(lookup, ResolverOptions::from(&config.resolver));
    let app = build_router(AppState::new(resolver));

    let addr = &config.server.bind_addr;
    tracing::info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Payment gateway server binary.
//!
//! Loads configuration from the environment, wires the Stripe and
//! identity adapters into the HTTP router, and serves until shutdown.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use payment_gateway::adapters::http::{gateway_router, GatewayState};
use payment_gateway::adapters::identity::{AdminApiConfig, AdminApiIdentityProvider};
use payment_gateway::adapters::stripe::{StripeConfig, StripePaymentAdapter};
use payment_gateway::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    if config.payment.is_live_mode() && !config.is_production() {
        tracing::warn!("Live Stripe key configured outside production");
    }

    let mut stripe_config = StripeConfig::new(config.payment.stripe_api_key.clone());
    if let Some(base_url) = &config.payment.stripe_api_base_url {
        stripe_config = stripe_config.with_base_url(base_url);
    }
    let payment_provider = Arc::new(StripePaymentAdapter::new(stripe_config));

    let identity_provider = Arc::new(AdminApiIdentityProvider::new(AdminApiConfig::new(
        &config.identity.admin_api_url,
        &config.identity.admin_api_token,
    )));

    let state = GatewayState {
        payment_provider,
        identity_provider,
    };

    let app = gateway_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, environment = ?config.server.environment, "Payment gateway listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Build the CORS layer.
///
/// Development allows any origin; otherwise only the configured origins
/// are accepted.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() && !config.is_production() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

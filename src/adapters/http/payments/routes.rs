//! Route definitions for the payment endpoints.

use axum::routing::post;
use axum::Router;

use crate::adapters::http::GatewayState;

use super::handlers;

/// Payment routes. POST-only; other methods get 405 from the router.
pub fn payment_routes() -> Router<GatewayState> {
    Router::new().route(
        "/create-payment-intent",
        post(handlers::create_payment_intent),
    )
}

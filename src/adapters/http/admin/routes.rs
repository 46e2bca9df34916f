//! Route definitions for the admin endpoints.

use axum::routing::post;
use axum::Router;

use crate::adapters::http::GatewayState;

use super::handlers;

/// Admin routes. POST-only; other methods get 405 from the router.
pub fn admin_routes() -> Router<GatewayState> {
    Router::new().route("/set-admin-claim", post(handlers::set_admin_claim))
}

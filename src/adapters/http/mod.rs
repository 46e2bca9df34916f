//! HTTP adapters - the gateway's REST surface.
//!
//! Each capability has its own module with DTOs, handlers, and routes.
//! Both share a single [`GatewayState`] carrying the collaborator ports,
//! so handlers stay testable against mock providers.

pub mod admin;
pub mod payments;

use std::sync::Arc;

use axum::extract::Json;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::ports::{IdentityProvider, PaymentProvider};

/// Shared application state containing the collaborator ports.
///
/// Cloned per request; the Arc-wrapped providers are constructed once at
/// process start and injected here.
#[derive(Clone)]
pub struct GatewayState {
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub identity_provider: Arc<dyn IdentityProvider>,
}

/// Standard error response body: `{"error": "..."}`.
///
/// The message is either a validation message naming the offending field
/// or the collaborator's own error text, passed through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
}

/// GET /health - liveness probe.
async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".to_string(),
    })
}

/// Create the complete gateway router.
///
/// # Routes
///
/// - `POST /create-payment-intent` - create a payment intent
/// - `POST /set-admin-claim` - grant the admin claim to a user
/// - `GET /health` - liveness probe
///
/// Middleware (trace, CORS, timeout) is layered on by the binary so the
/// bare router stays easy to drive in tests.
pub fn gateway_router(state: GatewayState) -> Router {
    Router::new()
        .merge(payments::payment_routes())
        .merge(admin::admin_routes())
        .route("/health", get(health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::identity::MockIdentityProvider;
    use crate::adapters::stripe::MockPaymentProvider;

    fn test_state() -> GatewayState {
        GatewayState {
            payment_provider: Arc::new(MockPaymentProvider::new()),
            identity_provider: Arc::new(MockIdentityProvider::new()),
        }
    }

    #[test]
    fn gateway_router_builds() {
        // Just verify routing table construction doesn't panic
        let _router = gateway_router(test_state());
    }

    #[test]
    fn error_body_serializes_to_error_field() {
        let body = ErrorBody::new("Missing amount or currency");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Missing amount or currency"}"#);
    }

    #[test]
    fn health_body_serializes() {
        let body = HealthBody {
            status: "ok".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}

//! Integration tests for the admin claim endpoint.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use payment_gateway::adapters::http::{gateway_router, ErrorBody, GatewayState};
use payment_gateway::adapters::identity::MockIdentityProvider;
use payment_gateway::adapters::stripe::MockPaymentProvider;
use payment_gateway::ports::IdentityError;

fn app_with(identity: MockIdentityProvider) -> Router {
    gateway_router(GatewayState {
        payment_provider: Arc::new(MockPaymentProvider::new()),
        identity_provider: Arc::new(identity),
    })
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ════════════════════════════════════════════════════════════════════════════
// Success Path
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn valid_uid_sets_claim_and_confirms() {
    let mock = MockIdentityProvider::new();
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_json("/set-admin-claim", r#"{"uid": "user123"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = body_json(response).await;
    assert_eq!(
        body["message"],
        "Admin claim set successfully for UID: user123"
    );

    let claims = mock.claims_for("user123").unwrap();
    assert_eq!(claims.get("admin"), Some(&serde_json::Value::Bool(true)));
}

#[tokio::test]
async fn repeated_grant_converges_on_same_response_and_state() {
    let mock = MockIdentityProvider::new();
    let app = app_with(mock.clone());

    let first = app
        .clone()
        .oneshot(post_json("/set-admin-claim", r#"{"uid": "user123"}"#))
        .await
        .unwrap();
    let claims_after_first = mock.claims_for("user123");

    let second = app
        .oneshot(post_json("/set-admin-claim", r#"{"uid": "user123"}"#))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let first_body: serde_json::Value = body_json(first).await;
    let second_body: serde_json::Value = body_json(second).await;
    assert_eq!(first_body, second_body);

    assert_eq!(mock.claims_for("user123"), claims_after_first);
    assert_eq!(mock.call_count(), 2);
}

// ════════════════════════════════════════════════════════════════════════════
// Validation
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn missing_uid_returns_400_without_calling_provider() {
    let mock = MockIdentityProvider::new();
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_json("/set-admin-claim", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = body_json(response).await;
    assert_eq!(body.error, "Missing uid parameter.");
    assert!(!mock.was_called());
}

#[tokio::test]
async fn empty_uid_returns_400() {
    let app = app_with(MockIdentityProvider::new());

    let response = app
        .oneshot(post_json("/set-admin-claim", r#"{"uid": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = body_json(response).await;
    assert_eq!(body.error, "Missing uid parameter.");
}

#[tokio::test]
async fn get_returns_405() {
    let app = app_with(MockIdentityProvider::new());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/set-admin-claim")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ════════════════════════════════════════════════════════════════════════════
// Provider Failures
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn unknown_user_returns_500_with_verbatim_message() {
    let mock = MockIdentityProvider::with_known_users(&["alice"]);
    let app = app_with(mock);

    let response = app
        .oneshot(post_json("/set-admin-claim", r#"{"uid": "ghost"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: ErrorBody = body_json(response).await;
    assert_eq!(body.error, "No user record found for uid: ghost");
}

#[tokio::test]
async fn provider_outage_returns_500() {
    let mock = MockIdentityProvider::failing_with(IdentityError::network("connection refused"));
    let app = app_with(mock);

    let response = app
        .oneshot(post_json("/set-admin-claim", r#"{"uid": "user123"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: ErrorBody = body_json(response).await;
    assert_eq!(body.error, "connection refused");
}

//! Identity provider admin API adapter.
//!
//! Implements the `IdentityProvider` trait against a REST admin API:
//! claims are written with a JSON `PUT` to the user's claims resource,
//! authenticated with a bearer token. The admin token is held in
//! `secrecy::SecretString` and sourced from configuration.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::ports::{ClaimSet, IdentityError, IdentityErrorCode, IdentityProvider};

/// Configuration for the identity admin API adapter.
#[derive(Clone)]
pub struct AdminApiConfig {
    /// Base URL of the admin API (e.g., "https://identity.example.com").
    api_url: String,

    /// Bearer token for admin operations.
    api_token: SecretString,
}

impl AdminApiConfig {
    /// Create a new configuration with required fields.
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_token: SecretString::new(api_token.into()),
        }
    }

    /// Build the claims URL for a user.
    fn claims_url(&self, uid: &str) -> String {
        format!("{}/v1/users/{}/claims", self.api_url.trim_end_matches('/'), uid)
    }
}

/// Error body returned by the admin API.
#[derive(Debug, Deserialize)]
struct AdminApiErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Identity provider backed by a REST admin API.
///
/// This is the production implementation of `IdentityProvider`.
pub struct AdminApiIdentityProvider {
    config: AdminApiConfig,
    http_client: reqwest::Client,
}

impl AdminApiIdentityProvider {
    /// Create a new admin API adapter.
    pub fn new(config: AdminApiConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Extract the provider's error message from a response body.
    ///
    /// Falls back to the raw body so the caller always sees what the
    /// provider actually said.
    fn error_message(status: u16, body: &str) -> String {
        let parsed: Option<AdminApiErrorBody> = serde_json::from_str(body).ok();

        parsed
            .and_then(|b| b.message.or(b.error))
            .unwrap_or_else(|| {
                if body.is_empty() {
                    format!("Identity admin API error (status {})", status)
                } else {
                    format!("Identity admin API error (status {}): {}", status, body)
                }
            })
    }
}

#[async_trait]
impl IdentityProvider for AdminApiIdentityProvider {
    async fn set_custom_claims(&self, uid: &str, claims: &ClaimSet) -> Result<(), IdentityError> {
        let url = self.config.claims_url(uid);

        let response = self
            .http_client
            .put(&url)
            .bearer_auth(self.config.api_token.expose_secret())
            .json(&json!({ "customClaims": claims }))
            .send()
            .await
            .map_err(|e| IdentityError::network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%uid, "Custom claims set");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = Self::error_message(status.as_u16(), &body);

        let code = match status.as_u16() {
            404 => IdentityErrorCode::UserNotFound,
            401 | 403 => IdentityErrorCode::AuthenticationError,
            _ => IdentityErrorCode::ProviderError,
        };

        tracing::warn!(%uid, status = status.as_u16(), code = %code, "set_custom_claims failed");

        Err(IdentityError::new(code, message))
    }
}

impl std::fmt::Debug for AdminApiIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminApiIdentityProvider")
            .field("api_url", &self.config.api_url)
            .finish_non_exhaustive()
    }
}

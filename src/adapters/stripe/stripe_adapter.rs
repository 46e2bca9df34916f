//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` trait against the Stripe REST API.
//! Requests are form-encoded with basic auth on the secret key, matching
//! Stripe's API conventions.
//!
//! # Security
//!
//! - Secret key handled via `secrecy::SecretString`
//! - Key is sourced from configuration, never hardcoded
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key);
//! let adapter = StripePaymentAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::ports::{
    CreatePaymentIntentRequest, PaymentError, PaymentErrorCode, PaymentIntent, PaymentProvider,
};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe payment provider adapter.
///
/// Implements `PaymentProvider` for Stripe API integration.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

/// Payment intent object as returned by Stripe.
#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: Option<String>,
    amount: i64,
    currency: String,
}

/// Stripe error envelope: `{"error": {"type": ..., "message": ...}}`.
#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeApiError,
}

#[derive(Debug, Deserialize)]
struct StripeApiError {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: Option<String>,
}

impl StripePaymentAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Map a non-success Stripe response to a `PaymentError`.
    ///
    /// Stripe's `card_error` and `invalid_request_error` types are
    /// caller-caused; everything else is the provider's problem. The
    /// message is Stripe's own text, passed through verbatim.
    fn map_error_response(status: u16, body: &str) -> PaymentError {
        let parsed: Option<StripeErrorBody> = serde_json::from_str(body).ok();

        let (error_type, message) = match parsed {
            Some(StripeErrorBody { error }) => (
                error.error_type.unwrap_or_default(),
                error
                    .message
                    .unwrap_or_else(|| format!("Stripe API error (status {})", status)),
            ),
            None => (
                String::new(),
                format!("Stripe API error (status {}): {}", status, body),
            ),
        };

        let code = match (status, error_type.as_str()) {
            (_, "card_error") | (_, "invalid_request_error") => PaymentErrorCode::InvalidRequest,
            (401, _) | (_, "authentication_error") => PaymentErrorCode::AuthenticationError,
            (429, _) | (_, "rate_limit_error") => PaymentErrorCode::RateLimitExceeded,
            (_, "api_error") => PaymentErrorCode::ProviderError,
            _ => PaymentErrorCode::ProviderError,
        };

        PaymentError::new(code, message)
    }
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        let url = format!("{}/v1/payment_intents", self.config.api_base_url);

        let params = [
            ("amount", request.amount.to_string()),
            ("currency", request.currency.clone()),
        ];

        let mut req = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params);

        if let Some(key) = &request.idempotency_key {
            req = req.header("Idempotency-Key", key);
        }

        let response = req
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let error = Self::map_error_response(status.as_u16(), &error_text);
            tracing::warn!(
                status = status.as_u16(),
                code = %error.code,
                "Stripe create_payment_intent failed"
            );
            return Err(error);
        }

        let intent: StripePaymentIntent = response.json().await.map_err(|e| {
            PaymentError::provider(format!("Failed to parse Stripe response: {}", e))
        })?;

        let client_secret = intent.client_secret.ok_or_else(|| {
            PaymentError::provider("Stripe response missing client_secret".to_string())
        })?;

        tracing::debug!(intent_id = %intent.id, "Payment intent created");

        Ok(PaymentIntent {
            id: intent.id,
            client_secret,
            amount: intent.amount,
            currency: intent.currency,
        })
    }
}

impl std::fmt::Debug for StripePaymentAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripePaymentAdapter")
            .field("api_base_url", &self.config.api_base_url)
            .finish_non_exhaustive()
    }
}

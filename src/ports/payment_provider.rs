//! Payment provider port for external payment processing.
//!
//! Defines the contract for payment gateway integrations (e.g., Stripe).
//! The gateway only needs one operation: creating a payment intent for a
//! charge amount and currency, yielding a client secret the caller uses
//! to complete payment client-side.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for payment provider integrations.
///
/// The provider retains authoritative state for every intent it creates;
/// the gateway holds nothing beyond the response it relays.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a payment intent for the given amount and currency.
    ///
    /// The call is only idempotent when `idempotency_key` is set;
    /// without one, client retries may create duplicate intents.
    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError>;
}

/// Request to create a payment intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Charge amount in the smallest currency unit (e.g., cents).
    pub amount: i64,

    /// Three-letter currency code (e.g., "usd").
    pub currency: String,

    /// Idempotency key for safe retries.
    pub idempotency_key: Option<String>,
}

impl CreatePaymentIntentRequest {
    /// Create a request without an idempotency key.
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            idempotency_key: None,
        }
    }

    /// Attach an idempotency key.
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }
}

/// Payment intent created by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider's intent ID.
    pub id: String,

    /// Opaque secret handed back to the caller for client-side completion.
    pub client_secret: String,

    /// Amount the intent was created for.
    pub amount: i64,

    /// Currency the intent was created in.
    pub currency: String,
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// The provider's own message, never rewritten.
    pub message: String,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            retryable: code.is_retryable(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    /// Create an invalid-request error (caller-caused, maps to 400).
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InvalidRequest, message)
    }

    /// Create a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }

    /// Whether the caller, not the gateway or provider, caused this error.
    pub fn is_client_error(&self) -> bool {
        self.code == PaymentErrorCode::InvalidRequest
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// The request was rejected as malformed or unprocessable
    /// (e.g., a currency the processor does not support).
    InvalidRequest,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,

    /// Unknown error.
    Unknown,
}

impl PaymentErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentErrorCode::NetworkError | PaymentErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::InvalidRequest => "invalid_request",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::ProviderError => "provider_error",
            PaymentErrorCode::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn payment_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn PaymentProvider) {}
    }

    #[test]
    fn request_builder_sets_idempotency_key() {
        let request = CreatePaymentIntentRequest::new(500, "usd").with_idempotency_key("key-1");
        assert_eq!(request.amount, 500);
        assert_eq!(request.currency, "usd");
        assert_eq!(request.idempotency_key, Some("key-1".to_string()));
    }

    #[test]
    fn request_new_has_no_idempotency_key() {
        let request = CreatePaymentIntentRequest::new(500, "usd");
        assert!(request.idempotency_key.is_none());
    }

    #[test]
    fn payment_error_retryable() {
        assert!(PaymentErrorCode::NetworkError.is_retryable());
        assert!(PaymentErrorCode::RateLimitExceeded.is_retryable());

        assert!(!PaymentErrorCode::InvalidRequest.is_retryable());
        assert!(!PaymentErrorCode::AuthenticationError.is_retryable());
    }

    #[test]
    fn invalid_request_is_client_error() {
        assert!(PaymentError::invalid_request("No such currency: xyz").is_client_error());
        assert!(!PaymentError::network("connection refused").is_client_error());
        assert!(!PaymentError::authentication("Invalid API key").is_client_error());
    }

    #[test]
    fn payment_error_display() {
        let err = PaymentError::invalid_request("No such currency: xyz");
        assert!(err.to_string().contains("invalid_request"));
        assert!(err.to_string().contains("No such currency: xyz"));
    }

    #[test]
    fn payment_error_message_is_preserved_verbatim() {
        let err = PaymentError::provider("Stripe API error: internal failure");
        assert_eq!(err.message, "Stripe API error: internal failure");
    }
}

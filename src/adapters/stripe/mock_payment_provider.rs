//! Mock payment provider for testing.
//!
//! Provides a configurable mock implementation of `PaymentProvider` for
//! unit and integration tests. Supports pre-configured responses, error
//! injection, and call tracking.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{CreatePaymentIntentRequest, PaymentError, PaymentIntent, PaymentProvider};

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
///
/// // Configure the next intent
/// mock.set_intent(PaymentIntent { client_secret: "secret_abc".into(), ... });
///
/// // Inject errors
/// mock.set_error(PaymentError::network("connection refused"));
///
/// // Use in tests
/// let result = mock.create_payment_intent(request).await;
/// ```
#[derive(Default)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Next intent to return.
    next_intent: Option<PaymentIntent>,

    /// Error to return on next call.
    next_error: Option<PaymentError>,

    /// Requests received, in order.
    call_log: Vec<CreatePaymentIntentRequest>,

    /// Counter for generated intent IDs.
    intent_counter: u64,
}

impl MockPaymentProvider {
    /// Create a new mock provider with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that returns an intent with the given client secret.
    pub fn with_client_secret(secret: impl Into<String>) -> Self {
        let mock = Self::new();
        let secret = secret.into();
        mock.set_intent(PaymentIntent {
            id: "pi_mock_1".to_string(),
            client_secret: secret,
            amount: 0,
            currency: String::new(),
        });
        mock
    }

    /// Create a mock that fails every call with the given error.
    pub fn failing_with(error: PaymentError) -> Self {
        let mock = Self::new();
        mock.set_error(error);
        mock
    }

    /// Set the intent to return on the next `create_payment_intent` call.
    pub fn set_intent(&self, intent: PaymentIntent) {
        self.inner.lock().unwrap().next_intent = Some(intent);
    }

    /// Set an error to return on the next call.
    pub fn set_error(&self, error: PaymentError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Clear any configured error.
    pub fn clear_error(&self) {
        self.inner.lock().unwrap().next_error = None;
    }

    /// Get all recorded requests.
    pub fn calls(&self) -> Vec<CreatePaymentIntentRequest> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Get count of create_payment_intent calls.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().call_log.len()
    }

    /// Check whether the provider was invoked at all.
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }
}

impl Clone for MockPaymentProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push(request.clone());

        // Error injection takes priority; persists until cleared so
        // repeated failure scenarios are easy to set up.
        if let Some(error) = state.next_error.clone() {
            return Err(error);
        }

        if let Some(mut intent) = state.next_intent.take() {
            intent.amount = request.amount;
            intent.currency = request.currency;
            return Ok(intent);
        }

        state.intent_counter += 1;
        let n = state.intent_counter;
        Ok(PaymentIntent {
            id: format!("pi_mock_{}", n),
            client_secret: format!("pi_mock_{}_secret_test", n),
            amount: request.amount,
            currency: request.currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PaymentErrorCode;

    #[tokio::test]
    async fn returns_generated_intent_by_default() {
        let mock = MockPaymentProvider::new();

        let result = mock
            .create_payment_intent(CreatePaymentIntentRequest::new(500, "usd"))
            .await
            .unwrap();

        assert!(result.id.starts_with("pi_mock_"));
        assert!(result.client_secret.contains("_secret_"));
        assert_eq!(result.amount, 500);
        assert_eq!(result.currency, "usd");
    }

    #[tokio::test]
    async fn returns_configured_intent() {
        let mock = MockPaymentProvider::with_client_secret("secret_abc");

        let result = mock
            .create_payment_intent(CreatePaymentIntentRequest::new(500, "usd"))
            .await
            .unwrap();

        assert_eq!(result.client_secret, "secret_abc");
        assert_eq!(result.amount, 500);
    }

    #[tokio::test]
    async fn generated_intent_ids_are_unique() {
        let mock = MockPaymentProvider::new();

        let first = mock
            .create_payment_intent(CreatePaymentIntentRequest::new(100, "usd"))
            .await
            .unwrap();
        let second = mock
            .create_payment_intent(CreatePaymentIntentRequest::new(200, "usd"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn set_error_returns_error_until_cleared() {
        let mock = MockPaymentProvider::new();
        mock.set_error(PaymentError::network("connection refused"));

        let first = mock
            .create_payment_intent(CreatePaymentIntentRequest::new(500, "usd"))
            .await;
        let second = mock
            .create_payment_intent(CreatePaymentIntentRequest::new(500, "usd"))
            .await;

        assert!(first.is_err());
        assert!(second.is_err());
        assert_eq!(first.unwrap_err().code, PaymentErrorCode::NetworkError);

        mock.clear_error();
        let third = mock
            .create_payment_intent(CreatePaymentIntentRequest::new(500, "usd"))
            .await;
        assert!(third.is_ok());
    }

    #[tokio::test]
    async fn tracks_calls_with_arguments() {
        let mock = MockPaymentProvider::new();
        assert!(!mock.was_called());

        mock.create_payment_intent(CreatePaymentIntentRequest::new(750, "eur"))
            .await
            .unwrap();

        assert!(mock.was_called());
        assert_eq!(mock.call_count(), 1);
        let calls = mock.calls();
        assert_eq!(calls[0].amount, 750);
        assert_eq!(calls[0].currency, "eur");
    }

    #[tokio::test]
    async fn failed_calls_are_still_recorded() {
        let mock = MockPaymentProvider::failing_with(PaymentError::provider("down"));

        let _ = mock
            .create_payment_intent(CreatePaymentIntentRequest::new(500, "usd"))
            .await;

        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let mock = MockPaymentProvider::new();
        let cloned = mock.clone();

        cloned
            .create_payment_intent(CreatePaymentIntentRequest::new(500, "usd"))
            .await
            .unwrap();

        assert_eq!(mock.call_count(), 1);
    }
}

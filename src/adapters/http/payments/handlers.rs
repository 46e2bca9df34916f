//! Request handlers for the payment endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::{ErrorBody, GatewayState};
use crate::ports::{CreatePaymentIntentRequest, PaymentError};

use super::dto::{PaymentIntentRequest, PaymentIntentResponse};

/// Errors a payment endpoint can produce.
///
/// Validation failures are always the client's fault. Provider errors
/// map to 400 only when the provider classified the request itself as
/// invalid; everything else is a 500.
#[derive(Debug)]
pub enum PaymentApiError {
    /// Request body failed validation; message is sent to the client.
    Validation(String),

    /// The payment provider rejected or failed the call.
    Provider(PaymentError),
}

impl PaymentApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<PaymentError> for PaymentApiError {
    fn from(error: PaymentError) -> Self {
        Self::Provider(error)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::Provider(error) => {
                let status = if error.is_client_error() {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                // Provider message passes through verbatim
                (status, error.message)
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// POST /create-payment-intent - create a payment intent with the
/// configured provider.
///
/// Returns 200 with `{"clientSecret": "..."}` on success. Malformed or
/// incomplete bodies get a 400 before the provider is ever called.
pub async fn create_payment_intent(
    State(state): State<GatewayState>,
    payload: Result<Json<PaymentIntentRequest>, JsonRejection>,
) -> Result<Json<PaymentIntentResponse>, PaymentApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected payment intent body");
        PaymentApiError::validation(rejection.body_text())
    })?;

    let (amount, currency) = request.validate().map_err(PaymentApiError::validation)?;

    tracing::info!(amount, %currency, "Creating payment intent");

    let intent = state
        .payment_provider
        .create_payment_intent(CreatePaymentIntentRequest::new(amount, currency))
        .await?;

    tracing::info!(intent_id = %intent.id, "Payment intent created");

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

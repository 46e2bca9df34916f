//! Data transfer objects for the payment endpoints.

use serde::{Deserialize, Serialize};

/// Request body for POST /create-payment-intent.
///
/// Fields are optional at the wire level so an empty body deserializes
/// and validation can name exactly what is missing.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentRequest {
    /// Amount in the currency's minor unit (e.g., cents).
    #[serde(default)]
    pub amount: Option<i64>,

    /// ISO currency code (e.g., "usd").
    #[serde(default)]
    pub currency: Option<String>,
}

impl PaymentIntentRequest {
    /// Validate the request and return the checked fields.
    ///
    /// The error string is the exact message the client sees.
    pub fn validate(self) -> Result<(i64, String), String> {
        let currency = self.currency.filter(|c| !c.trim().is_empty());

        let amount = match (self.amount, &currency) {
            (None, None) => return Err("Missing amount or currency".to_string()),
            (None, Some(_)) => return Err("Missing amount".to_string()),
            (Some(_), None) => return Err("Missing currency".to_string()),
            (Some(amount), Some(_)) => amount,
        };

        if amount <= 0 {
            return Err("Amount must be a positive integer".to_string());
        }

        // checked above
        let currency = currency.unwrap_or_default();

        Ok((amount, currency))
    }
}

/// Response body for a created payment intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    /// Client secret the frontend uses to confirm the payment.
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

//! Identity provider port for user claim management.
//!
//! Defines the contract for identity-provider admin integrations. The
//! gateway uses a single operation: attaching custom claims to a user
//! account. Setting the same claims twice converges to the same end
//! state, so the operation is safe to repeat.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A set of custom claims to attach to a user account.
pub type ClaimSet = serde_json::Map<String, Value>;

/// Build the elevated-privilege claim set `{ "admin": true }`.
pub fn admin_claims() -> ClaimSet {
    let mut claims = ClaimSet::new();
    claims.insert("admin".to_string(), Value::Bool(true));
    claims
}

/// Port for identity provider admin integrations.
///
/// The identity provider is the system of record for claims; the
/// gateway only relays the grant and reports the outcome.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Attach custom claims to the user identified by `uid`.
    ///
    /// Idempotent: repeating the call with the same claims leaves the
    /// account in the same state.
    async fn set_custom_claims(&self, uid: &str, claims: &ClaimSet) -> Result<(), IdentityError>;
}

/// Errors from identity provider operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityError {
    /// Error code for categorization.
    pub code: IdentityErrorCode,

    /// The provider's own message, never rewritten.
    pub message: String,
}

impl IdentityError {
    /// Create a new identity error.
    pub fn new(code: IdentityErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a user-not-found error.
    pub fn user_not_found(uid: &str) -> Self {
        Self::new(
            IdentityErrorCode::UserNotFound,
            format!("No user record found for uid: {}", uid),
        )
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(IdentityErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(IdentityErrorCode::AuthenticationError, message)
    }

    /// Create a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(IdentityErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for IdentityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for IdentityError {}

/// Identity error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityErrorCode {
    /// No account exists for the given uid.
    UserNotFound,

    /// Network connectivity issue.
    NetworkError,

    /// Admin API authentication failed.
    AuthenticationError,

    /// Provider API error.
    ProviderError,
}

impl std::fmt::Display for IdentityErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IdentityErrorCode::UserNotFound => "user_not_found",
            IdentityErrorCode::NetworkError => "network_error",
            IdentityErrorCode::AuthenticationError => "authentication_error",
            IdentityErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}

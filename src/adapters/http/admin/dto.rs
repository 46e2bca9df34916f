//! Data transfer objects for the admin endpoints.

use serde::{Deserialize, Serialize};

/// Request body for POST /set-admin-claim.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminClaimRequest {
    /// Identifier of the user account to grant the admin claim to.
    #[serde(default)]
    pub uid: Option<String>,
}

impl AdminClaimRequest {
    /// Validate the request and return the uid.
    ///
    /// An absent or empty uid yields the exact client-facing message.
    pub fn validate(self) -> Result<String, String> {
        match self.uid {
            Some(uid) if !uid.trim().is_empty() => Ok(uid),
            _ => Err("Missing uid parameter.".to_string()),
        }
    }
}

/// Response body for a successful claim grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaimResponse {
    pub message: String,
}

impl AdminClaimResponse {
    /// Build the success response for a uid.
    pub fn for_uid(uid: &str) -> Self {
        Self {
            message: format!("Admin claim set successfully for UID: {}", uid),
        }
    }
}

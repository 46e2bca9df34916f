//! Identity provider configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Identity provider admin API configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the identity provider's admin API
    pub admin_api_url: String,

    /// Bearer token for the admin API
    pub admin_api_token: String,
}

impl IdentityConfig {
    /// Validate identity configuration
    ///
    /// Requires HTTPS in production; plain HTTP is allowed elsewhere
    /// so tests can point at a local stub.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.admin_api_url.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PAYMENT_GATEWAY__IDENTITY__ADMIN_API_URL",
            ));
        }
        if self.admin_api_token.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PAYMENT_GATEWAY__IDENTITY__ADMIN_API_TOKEN",
            ));
        }

        if !self.admin_api_url.starts_with("http://") && !self.admin_api_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidAdminApiUrl);
        }

        if *environment == Environment::Production && !self.admin_api_url.starts_with("https://") {
            return Err(ValidationError::AdminApiMustBeHttps);
        }

        Ok(())
    }
}

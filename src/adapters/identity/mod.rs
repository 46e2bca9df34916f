//! Identity adapter - claim management through an identity provider's
//! admin API.

mod admin_api;
mod mock;

pub use admin_api::{AdminApiConfig, AdminApiIdentityProvider};
pub use mock::MockIdentityProvider;

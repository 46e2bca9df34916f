//! Admin endpoints - custom claim management.

mod dto;
mod handlers;
mod routes;

pub use dto::{AdminClaimRequest, AdminClaimResponse};
pub use handlers::AdminApiError;
pub use routes::admin_routes;

//! Payment endpoints - payment intent creation.

mod dto;
mod handlers;
mod routes;

pub use dto::{PaymentIntentRequest, PaymentIntentResponse};
pub use handlers::PaymentApiError;
pub use routes::payment_routes;

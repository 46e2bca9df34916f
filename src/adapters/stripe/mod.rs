//! Stripe adapter - payment provider backed by the Stripe REST API.

mod mock_payment_provider;
mod stripe_adapter;

pub use mock_payment_provider::MockPaymentProvider;
pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};

//! Ports - trait interfaces for external collaborators.
//!
//! The gateway consumes two capabilities: a payment processor that can
//! create payment intents, and an identity provider that can attach
//! custom claims to user accounts. Both are pre-authenticated at
//! construction time; handlers receive them as trait objects.

mod identity_provider;
mod payment_provider;

pub use identity_provider::{admin_claims, ClaimSet, IdentityError, IdentityErrorCode, IdentityProvider};
pub use payment_provider::{
    CreatePaymentIntentRequest, PaymentError, PaymentErrorCode, PaymentIntent, PaymentProvider,
};

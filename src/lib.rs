//! Payment Gateway - payment intent creation and admin claim management.
//!
//! This crate exposes two independent capabilities behind a single axum
//! server: creating payment intents through a payment-processing backend
//! (Stripe) and granting admin claims through an identity-provider
//! admin API. Both backends are consumed through ports so handlers can
//! be tested against mock implementations.

pub mod adapters;
pub mod config;
pub mod ports;

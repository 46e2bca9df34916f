//! Mock identity provider for testing.
//!
//! Implements the `IdentityProvider` port with an in-memory claim store
//! so tests can observe the idempotent claim state without a real
//! identity provider. Supports error injection and call tracking.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{ClaimSet, IdentityError, IdentityProvider};

/// Mock identity provider for testing.
///
/// Unknown uids succeed by default (matching an identity provider that
/// auto-provisions); call `with_known_users` to restrict the account
/// set and have other uids fail with `UserNotFound`.
#[derive(Default)]
pub struct MockIdentityProvider {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Claims by uid, as last written.
    claims: HashMap<String, ClaimSet>,

    /// When set, only these uids exist; others return UserNotFound.
    known_users: Option<Vec<String>>,

    /// Error to return on every call until cleared.
    next_error: Option<IdentityError>,

    /// Recorded (uid, claims) calls.
    call_log: Vec<(String, ClaimSet)>,
}

impl MockIdentityProvider {
    /// Create a new mock provider accepting any uid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the provider to the given user accounts.
    pub fn with_known_users(users: &[&str]) -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().known_users =
            Some(users.iter().map(|u| u.to_string()).collect());
        mock
    }

    /// Create a mock that fails every call with the given error.
    pub fn failing_with(error: IdentityError) -> Self {
        let mock = Self::new();
        mock.set_error(error);
        mock
    }

    /// Set an error to return on every call until cleared.
    pub fn set_error(&self, error: IdentityError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Clear any configured error.
    pub fn clear_error(&self) {
        self.inner.lock().unwrap().next_error = None;
    }

    /// Get the claims currently stored for a uid.
    pub fn claims_for(&self, uid: &str) -> Option<ClaimSet> {
        self.inner.lock().unwrap().claims.get(uid).cloned()
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<(String, ClaimSet)> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Get count of set_custom_claims calls.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().call_log.len()
    }

    /// Check whether the provider was invoked at all.
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }
}

impl Clone for MockIdentityProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn set_custom_claims(&self, uid: &str, claims: &ClaimSet) -> Result<(), IdentityError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push((uid.to_string(), claims.clone()));

        if let Some(error) = state.next_error.clone() {
            return Err(error);
        }

        if let Some(known) = &state.known_users {
            if !known.iter().any(|u| u == uid) {
                return Err(IdentityError::user_not_found(uid));
            }
        }

        // Overwrite semantics: setting the same claims twice converges.
        state.claims.insert(uid.to_string(), claims.clone());
        Ok(())
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::repository::OtpStore;
use crate::domain::types::OtpChallenge;

/// Process-wide challenge store: one map, guarded by a mutex so the
/// one-challenge-per-email invariant holds across runtime worker threads.
/// Handles are cheap clones sharing the same map.
///
/// Eviction is lazy: expired entries stay in the map until overwritten or
/// consumed, and are rejected at verification. Store lifetime equals process
/// lifetime, so unreachable stale entries are bounded by the number of
/// distinct emails ever challenged (exactly one here).
#[derive(Clone, Default)]
pub struct InMemoryOtpStore {
    inner: Arc<Mutex<HashMap<String, OtpChallenge>>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OtpStore for InMemoryOtpStore {
    fn put(&self, challenge: OtpChallenge) {
        let mut map = self.inner.lock().expect("otp store mutex poisoned");
        map.insert(challenge.email.clone(), challenge);
    }

    fn get(&self, email: &str) -> Option<OtpChallenge> {
        let map = self.inner.lock().expect("otp store mutex poisoned");
        map.get(email).cloned()
    }

    fn remove(&self, email: &str) {
        let mut map = self.inner.lock().expect("otp store mutex poisoned");
        map.remove(email);
    }
}

//! Resend-cooldown timer for the OTP/email flows.
//!
//! Purely a UX pacing helper: it drives the countdown next to the "resend"
//! button and must never be the enforcement point. The backend independently
//! rejects too-frequent requests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::client::envelope::Validate;
use crate::client::{ApiClient, ApiRequest};
use crate::error::ClientResult;
use crate::session::RequestContext;
use crate::verify::VerifyPurpose;

/// Key-value store with per-key TTL, reduced to the two operations the
/// cooldown needs.
#[async_trait]
pub trait CooldownStore: Send + Sync {
    /// Store a cooldown of `secs` seconds against `key`, replacing any
    /// previous value and expiry.
    async fn set(&self, key: &str, secs: u64) -> ClientResult<()>;

    /// Seconds until `key` expires; 0 when absent or already expired.
    async fn remaining(&self, key: &str) -> ClientResult<u64>;
}

/// In-process store: a deadline per key behind a mutex. Each key is set and
/// read independently, so one lock around the map is enough.
#[derive(Default)]
pub struct MemoryCooldownStore {
    deadlines: Mutex<HashMap<String, Instant>>,
}

impl MemoryCooldownStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// Process-wide singleton slot so repeated initialization (hot reloads,
// multiple call sites) shares one map.
static SHARED_STORE: Lazy<MemoryCooldownStore> = Lazy::new(MemoryCooldownStore::new);

pub fn shared_store() -> &'static MemoryCooldownStore {
    &SHARED_STORE
}

#[async_trait]
impl CooldownStore for MemoryCooldownStore {
    async fn set(&self, key: &str, secs: u64) -> ClientResult<()> {
        let deadline = Instant::now() + Duration::from_secs(secs);
        let mut deadlines = self.deadlines.lock().unwrap_or_else(|e| e.into_inner());
        deadlines.insert(key.to_string(), deadline);
        Ok(())
    }

    async fn remaining(&self, key: &str) -> ClientResult<u64> {
        let mut deadlines = self.deadlines.lock().unwrap_or_else(|e| e.into_inner());
        let Some(deadline) = deadlines.get(key).copied() else {
            return Ok(0);
        };
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            deadlines.remove(key);
            return Ok(0);
        }
        // Round up so an immediate read after set(N) reports N, not N-1
        let mut secs = left.as_secs();
        if left.subsec_nanos() > 0 {
            secs += 1;
        }
        Ok(secs)
    }
}

#[async_trait]
impl<S: CooldownStore + ?Sized> CooldownStore for &S {
    async fn set(&self, key: &str, secs: u64) -> ClientResult<()> {
        (**self).set(key, secs).await
    }

    async fn remaining(&self, key: &str) -> ClientResult<u64> {
        (**self).remaining(key).await
    }
}

#[derive(Debug, Deserialize)]
struct RemainingTime {
    remaining: u64,
}

impl Validate for RemainingTime {}

/// Store backed by the backend's two narrow timer endpoints, for when the
/// countdown must be shared across processes or devices.
pub struct RemoteCooldownStore {
    client: ApiClient,
}

impl RemoteCooldownStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CooldownStore for RemoteCooldownStore {
    async fn set(&self, key: &str, secs: u64) -> ClientResult<()> {
        let request = ApiRequest::post("/timers/set-retry-timer")
            .json(&serde_json::json!({ "key": key, "seconds": secs }))?
            .public();
        self.client.send_ok(&RequestContext::anonymous(), request).await?;
        Ok(())
    }

    async fn remaining(&self, key: &str) -> ClientResult<u64> {
        let request = ApiRequest::get("/timers/get-remaining-time")
            .query("key", Some(key))
            .public();
        let remaining: RemainingTime =
            self.client.send(&RequestContext::anonymous(), request).await?;
        Ok(remaining.remaining)
    }
}

/// Cooldown keyed by `{purpose}:{email}`, the unit the resend UI works in.
pub struct RetryTimer<S: CooldownStore> {
    store: S,
}

impl<S: CooldownStore> RetryTimer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn key(purpose: VerifyPurpose, email: &str) -> String {
        format!("{}:{}", purpose.as_str(), email)
    }

    /// Start (or restart) the cooldown with the server-dictated duration.
    pub async fn start(
        &self,
        purpose: VerifyPurpose,
        email: &str,
        secs: u64,
    ) -> ClientResult<()> {
        self.store.set(&Self::key(purpose, email), secs).await
    }

    /// Seconds left before another resend is allowed; 0 means go ahead.
    pub async fn remaining(&self, purpose: VerifyPurpose, email: &str) -> ClientResult<u64> {
        self.store.remaining(&Self::key(purpose, email)).await
    }
}

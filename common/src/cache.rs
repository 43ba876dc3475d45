//! Time-to-live cache
//!
//! Single-entry cache with explicit fetch and expiry timestamps. Time is
//! passed in as milliseconds since the Unix epoch so the same type works
//! natively and in the browser, and tests can drive the clock.

use std::time::Duration;

/// How long a fetched table is reused
pub const CACHE_TTL: Duration = Duration::from_secs(60);

/// Milliseconds since the Unix epoch
pub type Millis = i64;

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub value: T,
    pub fetched_at: Millis,
    pub expires_at: Millis,
}

impl<T> CacheEntry<T> {
    /// Fresh in `[fetched_at, expires_at)`. A clock that moved backwards
    /// makes the entry stale.
    pub fn is_fresh(&self, now: Millis) -> bool {
        self.fetched_at <= now && now < self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct TtlCache<T> {
    ttl: Duration,
    entry: Option<CacheEntry<T>>,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached value if still fresh at `now`
    pub fn get(&self, now: Millis) -> Option<&T> {
        self.entry
            .as_ref()
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| &entry.value)
    }

    /// Replaces the entry wholesale
    pub fn store(&mut self, value: T, now: Millis) {
        let ttl_ms = Millis::try_from(self.ttl.as_millis()).unwrap_or(Millis::MAX);
        self.entry = Some(CacheEntry {
            value,
            fetched_at: now,
            expires_at: now.saturating_add(ttl_ms),
        });
    }

    pub fn entry(&self) -> Option<&CacheEntry<T>> {
        self.entry.as_ref()
    }

    pub fn expires_at(&self) -> Option<Millis> {
        self.entry.as_ref().map(|entry| entry.expires_at)
    }
}

impl<T> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new(CACHE_TTL)
    }
}

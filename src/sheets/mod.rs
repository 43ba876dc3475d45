//! Spreadsheet access
//!
//! [`SheetsSource`] reads the live spreadsheet, [`CachedSource`] puts the
//! 60 second fetch cache in front of any [`RecordSource`].

mod auth;
mod client;
mod credentials;

pub use auth::{fetch_access_token, sign_assertion, Claims, SCOPES};
pub use client::{drive_name_query, sheet_range, status_error, values_url, Endpoints, SheetsSource};
pub use credentials::{ServiceAccountKey, DEFAULT_TOKEN_URI};

use crate::error::Result;
use puslespill_common::{Millis, Table, TtlCache, CACHE_TTL};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info};

/// Anything that can produce the full table
pub trait RecordSource: Send + Sync {
    fn fetch_table(&self) -> impl Future<Output = Result<Table>> + Send;
}

pub type Clock = Arc<dyn Fn() -> Millis + Send + Sync>;

pub fn system_clock() -> Millis {
    chrono::Utc::now().timestamp_millis()
}

/// Fetch cache in front of a source
///
/// The lock only guards the cache entry and is released before the inner
/// fetch, so concurrent misses may both fetch; the later store wins.
/// Failed fetches are not cached.
pub struct CachedSource<S> {
    inner: S,
    cache: Mutex<TtlCache<Table>>,
    clock: Clock,
}

impl<S: RecordSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self::with_clock(inner, CACHE_TTL, Arc::new(system_clock))
    }

    pub fn with_clock(inner: S, ttl: Duration, clock: Clock) -> Self {
        Self {
            inner,
            cache: Mutex::new(TtlCache::new(ttl)),
            clock,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Expiry of the current entry, if any
    pub fn expires_at(&self) -> Option<Millis> {
        self.lock().expires_at()
    }

    fn lock(&self) -> MutexGuard<'_, TtlCache<Table>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: RecordSource> RecordSource for CachedSource<S> {
    async fn fetch_table(&self) -> Result<Table> {
        let now = (self.clock)();
        let cached = self.lock().get(now).cloned();
        if let Some(table) = cached {
            debug!(records = table.len(), "cache hit");
            return Ok(table);
        }

        info!("cache miss, fetching spreadsheet");
        let table = self.inner.fetch_table().await?;
        self.lock().store(table.clone(), (self.clock)());
        Ok(table)
    }
}

/// Fetch, then apply the optional sort-on-load
pub async fn load_table<S: RecordSource>(source: &S, sort_on_load: bool) -> Result<Table> {
    let table = source.fetch_table().await?;
    Ok(if sort_on_load {
        table.sorted_by_barcode()
    } else {
        table
    })
}

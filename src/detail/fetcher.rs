use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout, Instant};

use crate::api::{ApiError, UserApi};
use crate::config::{ApiConfig, CacheConfig};
use crate::detail::cache::DetailCache;
use crate::record::UserRecord;

/// Bounded wait and retry budget for a detail fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Bound on a single attempt; an attempt still pending is aborted.
    pub timeout: Duration,
    /// Attempts after the first failure.
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

impl From<&ApiConfig> for FetchPolicy {
    fn from(api: &ApiConfig) -> Self {
        Self {
            timeout: api.timeout(),
            max_retries: api.max_retries,
            retry_backoff: api.retry_backoff(),
        }
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    /// Served from a fresh cache entry, no request issued.
    Cache,
    Network,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub record: UserRecord,
    pub source: FetchSource,
    /// Network attempts made (0 for a cache hit).
    pub attempts: u32,
}

/// Loads user records, sharing one cache between clones.
pub struct DetailFetcher<A> {
    api: Arc<A>,
    cache: Arc<Mutex<DetailCache>>,
    policy: FetchPolicy,
}

impl<A> Clone for DetailFetcher<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            cache: Arc::clone(&self.cache),
            policy: self.policy,
        }
    }
}

impl<A: UserApi> DetailFetcher<A> {
    pub fn new(api: Arc<A>, policy: FetchPolicy, cache: &CacheConfig) -> Self {
        Self {
            api,
            cache: Arc::new(Mutex::new(DetailCache::new(cache.stale_time()))),
            policy,
        }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Fetch `id`, reusing a fresh cache entry when there is one.
    pub async fn fetch(&self, id: &str) -> Result<Fetched, ApiError> {
        let cached = self.cache.lock().fresh(id, Instant::now()).cloned();
        if let Some(record) = cached {
            tracing::debug!(id, "user detail served from cache");
            return Ok(Fetched {
                record,
                source: FetchSource::Cache,
                attempts: 0,
            });
        }
        self.fetch_from_network(id).await
    }

    /// Fetch `id` from the service even if a fresh entry exists.
    pub async fn refetch(&self, id: &str) -> Result<Fetched, ApiError> {
        self.fetch_from_network(id).await
    }

    /// Record to show while `id` loads: its own fresh entry, otherwise the
    /// previous result of any identifier.
    pub fn placeholder_for(&self, id: &str) -> Option<UserRecord> {
        let cache = self.cache.lock();
        cache
            .fresh(id, Instant::now())
            .or_else(|| cache.placeholder())
            .cloned()
    }

    /// Drop the cached entry for `id` so the next fetch hits the service.
    pub fn invalidate(&self, id: &str) {
        if self.cache.lock().invalidate(id) {
            tracing::debug!(id, "user detail invalidated");
        }
    }

    async fn fetch_from_network(&self, id: &str) -> Result<Fetched, ApiError> {
        if id.is_empty() {
            return Err(ApiError::InvalidIdentifier(id.to_string()));
        }

        let total_attempts = self.policy.max_retries.saturating_add(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            let result = match timeout(self.policy.timeout, self.api.detail(id)).await {
                Ok(result) => result,
                Err(_) => Err(ApiError::Timeout {
                    duration: self.policy.timeout,
                }),
            };
            // Updates go to `id` with this body, so a record of another user is rejected
            let result = result.and_then(|record| {
                if record.id == id {
                    Ok(record)
                } else {
                    Err(ApiError::Decode(format!(
                        "requested user '{}' but the service returned '{}'",
                        id, record.id
                    )))
                }
            });

            match result {
                Ok(record) => {
                    self.cache
                        .lock()
                        .insert(id, record.clone(), Instant::now());
                    tracing::info!(id, attempt, "user detail fetched");
                    return Ok(Fetched {
                        record,
                        source: FetchSource::Network,
                        attempts: attempt,
                    });
                }
                Err(err) if attempt < total_attempts => {
                    tracing::warn!(id, attempt, error = %err, "user detail fetch failed, retrying");
                    if !self.policy.retry_backoff.is_zero() {
                        tokio::time::sleep(self.policy.retry_backoff * attempt).await;
                    }
                }
                Err(err) => {
                    tracing::error!(id, attempt, error = %err, "user detail fetch failed");
                    return Err(err);
                }
            }
        }
    }
}

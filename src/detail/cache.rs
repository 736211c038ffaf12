use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

use crate::record::UserRecord;

#[derive(Debug, Clone)]
struct CacheEntry {
    record: UserRecord,
    fetched_at: Instant,
}

/// Successful detail results keyed by identifier.
///
/// An entry younger than `stale_time` is served without a network call.
/// Independently of the entries, the most recent successful result is kept
/// as placeholder data for the next identifier that loads.
#[derive(Debug)]
pub struct DetailCache {
    stale_time: Duration,
    entries: HashMap<String, CacheEntry>,
    previous: Option<UserRecord>,
}

impl DetailCache {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            entries: HashMap::new(),
            previous: None,
        }
    }

    /// The cached record for `id` if it was fetched less than `stale_time` ago.
    pub fn fresh(&self, id: &str, now: Instant) -> Option<&UserRecord> {
        self.entries
            .get(id)
            .filter(|entry| now.saturating_duration_since(entry.fetched_at) < self.stale_time)
            .map(|entry| &entry.record)
    }

    /// Store a successful result and drop entries that went stale.
    pub fn insert(&mut self, id: &str, record: UserRecord, now: Instant) {
        let stale_time = self.stale_time;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.fetched_at) < stale_time);
        self.previous = Some(record.clone());
        self.entries.insert(
            id.to_string(),
            CacheEntry {
                record,
                fetched_at: now,
            },
        );
    }

    /// Most recent successful result of any identifier.
    pub fn placeholder(&self) -> Option<&UserRecord> {
        self.previous.as_ref()
    }

    pub fn invalidate(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }
}

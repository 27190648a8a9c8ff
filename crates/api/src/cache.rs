//! Expiring response cache for the unpaginated status listings.
//!
//! A time-boxed key/value map with no domain logic: entries expire after a
//! fixed TTL, reads expire lazily, and a periodic sweeper task removes
//! stale entries so an idle key cannot pin memory. Keys follow the
//! `{entity}:{operation}` convention (e.g. `shows:current`) so a write to
//! an entity can invalidate every cached listing for it by prefix.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

struct CacheEntry {
    value: serde_json::Value,
    expires_at: Instant,
}

/// Thread-safe expiring key/value cache; designed to be wrapped in `Arc`
/// and shared across the application.
pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    /// Create an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch a live entry. Expired entries are treated as absent (and left
    /// for the sweeper to reclaim).
    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.expires_at <= Instant::now() {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Insert or replace an entry, restarting its TTL.
    pub async fn insert(&self, key: impl Into<String>, value: serde_json::Value) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    /// Drop every entry whose key starts with `prefix`.
    ///
    /// Called on every write to an entity with `"{entity}:"` so stale
    /// listings never outlive the data they were derived from.
    pub async fn invalidate_prefix(&self, prefix: &str) {
        self.entries
            .write()
            .await
            .retain(|key, _| !key.starts_with(prefix));
    }

    /// Remove expired entries, returning how many were dropped.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    /// Current number of entries, live or expired-but-unswept.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no entries at all.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Spawn the periodic sweeper task.
///
/// Runs until `cancel` is triggered; the caller should await the returned
/// handle during shutdown.
pub fn start_sweeper(
    cache: Arc<ResponseCache>,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick fires immediately; skip it.
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = cache.sweep().await;
                    if removed > 0 {
                        tracing::debug!(removed, "Swept expired cache entries");
                    }
                }
                _ = cancel.cancelled() => {
                    tracing::debug!("Cache sweeper stopped");
                    break;
                }
            }
        }
    })
}

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::ports::HealthCheckRepository,
    interaction::{
        entities::{InteractionLogEntry, PlayerScore, aggregate_scores},
        ports::{InteractionLogRepository, LeaderboardRepository},
    },
    reaction::{
        entities::{CacheEntry, CacheKey},
        ports::ReactionCacheRepository,
    },
};

/// Process-local store. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    reaction_cache: RwLock<HashMap<CacheKey, CacheEntry>>,
    gut_logs: RwLock<Vec<InteractionLogEntry>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every read return a `StoreError`, simulating an outage.
    #[cfg(test)]
    pub fn fail_reads(&self, fail: bool) {
        self.inner.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every write return a `StoreError`, simulating an outage.
    #[cfg(test)]
    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn cached_keys(&self) -> Vec<CacheKey> {
        self.inner.reaction_cache.read().await.keys().cloned().collect()
    }

    pub async fn logs(&self) -> Vec<InteractionLogEntry> {
        self.inner.gut_logs.read().await.clone()
    }

    fn check_read(&self) -> Result<(), CoreError> {
        if self.inner.fail_reads.load(Ordering::SeqCst) {
            return Err(CoreError::StoreError("memory store is unreadable".to_string()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), CoreError> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(CoreError::StoreError("memory store is read-only".to_string()));
        }
        Ok(())
    }
}

impl ReactionCacheRepository for InMemoryStore {
    async fn get_cached(&self, key: &CacheKey) -> Result<Option<CacheEntry>, CoreError> {
        self.check_read()?;
        Ok(self.inner.reaction_cache.read().await.get(key).cloned())
    }

    async fn put_cached(&self, entry: CacheEntry) -> Result<(), CoreError> {
        self.check_write()?;
        self.inner
            .reaction_cache
            .write()
            .await
            .insert(entry.key.clone(), entry);
        Ok(())
    }
}

impl InteractionLogRepository for InMemoryStore {
    async fn append_log(&self, entry: InteractionLogEntry) -> Result<(), CoreError> {
        self.check_write()?;
        self.inner.gut_logs.write().await.push(entry);
        Ok(())
    }
}

impl LeaderboardRepository for InMemoryStore {
    async fn read_leaderboard(&self, limit: u32) -> Result<Vec<PlayerScore>, CoreError> {
        self.check_read()?;
        let logs = self.inner.gut_logs.read().await;
        Ok(aggregate_scores(&logs, limit as usize))
    }
}

impl HealthCheckRepository for InMemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<Option<u64>, CoreError> {
        self.check_read()?;
        Ok(Some(0))
    }
}

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::ports::HealthCheckRepository,
    interaction::{
        entities::{InteractionLogEntry, PlayerScore},
        ports::{InteractionLogRepository, LeaderboardRepository},
    },
    reaction::{
        entities::{CacheEntry, CacheKey},
        ports::ReactionCacheRepository,
    },
};

pub mod memory;
pub mod postgres;
pub mod supabase;

use memory::InMemoryStore;
use postgres::PostgresStore;
use supabase::SupabaseStore;

/// The persistence gateway selected at startup.
///
/// `Disabled` reads nothing and drops every write, so the rest of the service
/// keeps working without credentials.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Postgres(PostgresStore),
    Supabase(SupabaseStore),
    Memory(InMemoryStore),
    Disabled,
}

impl ReactionCacheRepository for StoreBackend {
    async fn get_cached(&self, key: &CacheKey) -> Result<Option<CacheEntry>, CoreError> {
        match self {
            StoreBackend::Postgres(store) => store.get_cached(key).await,
            StoreBackend::Supabase(store) => store.get_cached(key).await,
            StoreBackend::Memory(store) => store.get_cached(key).await,
            StoreBackend::Disabled => Ok(None),
        }
    }

    async fn put_cached(&self, entry: CacheEntry) -> Result<(), CoreError> {
        match self {
            StoreBackend::Postgres(store) => store.put_cached(entry).await,
            StoreBackend::Supabase(store) => store.put_cached(entry).await,
            StoreBackend::Memory(store) => store.put_cached(entry).await,
            StoreBackend::Disabled => Ok(()),
        }
    }
}

impl InteractionLogRepository for StoreBackend {
    async fn append_log(&self, entry: InteractionLogEntry) -> Result<(), CoreError> {
        match self {
            StoreBackend::Postgres(store) => store.append_log(entry).await,
            StoreBackend::Supabase(store) => store.append_log(entry).await,
            StoreBackend::Memory(store) => store.append_log(entry).await,
            StoreBackend::Disabled => Ok(()),
        }
    }
}

impl LeaderboardRepository for StoreBackend {
    async fn read_leaderboard(&self, limit: u32) -> Result<Vec<PlayerScore>, CoreError> {
        match self {
            StoreBackend::Postgres(store) => store.read_leaderboard(limit).await,
            StoreBackend::Supabase(store) => store.read_leaderboard(limit).await,
            StoreBackend::Memory(store) => store.read_leaderboard(limit).await,
            StoreBackend::Disabled => Ok(Vec::new()),
        }
    }
}

impl HealthCheckRepository for StoreBackend {
    fn backend(&self) -> &'static str {
        match self {
            StoreBackend::Postgres(store) => store.backend(),
            StoreBackend::Supabase(store) => store.backend(),
            StoreBackend::Memory(store) => store.backend(),
            StoreBackend::Disabled => "disabled",
        }
    }

    async fn ping(&self) -> Result<Option<u64>, CoreError> {
        match self {
            StoreBackend::Postgres(store) => store.ping().await,
            StoreBackend::Supabase(store) => store.ping().await,
            StoreBackend::Memory(store) => store.ping().await,
            StoreBackend::Disabled => Ok(None),
        }
    }
}

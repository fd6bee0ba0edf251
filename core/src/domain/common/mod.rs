use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod clock;
pub mod entities;
pub mod services;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Clone, Debug)]
pub struct GutflixConfig {
    pub store: StoreConfig,
    pub llm: LLMConfig,
    pub cache: CacheConfig,
}

/// Which persistence gateway backs the cache, the interaction log and the leaderboard.
#[derive(Clone, Debug)]
pub enum StoreConfig {
    Postgres(DatabaseConfig),
    Supabase(SupabaseConfig),
    Memory,
    Disabled,
}

impl StoreConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreConfig::Postgres(_) => "postgres",
            StoreConfig::Supabase(_) => "supabase",
            StoreConfig::Memory => "memory",
            StoreConfig::Disabled => "disabled",
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub run_migrations: bool,
}

#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// `None` when the upstream credentials are missing.
    /// Generation then degrades to the fallback bundle.
    pub azure_openai: Option<AzureOpenAIConfig>,
}

#[derive(Clone, Debug)]
pub struct AzureOpenAIConfig {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    pub api_version: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_CACHE_TTL,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

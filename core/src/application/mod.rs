use tracing::{info, warn};

use crate::{
    domain::{
        common::{GutflixConfig, LLMConfig, StoreConfig, clock::SystemClock, services::Service},
        health::ports::HealthCheckRepository,
    },
    infrastructure::{
        db::postgres::Postgres,
        llm::{LlmBackend, azure_openai_client::AzureOpenAIClient},
        store::{
            StoreBackend, memory::InMemoryStore, postgres::PostgresStore, supabase::SupabaseStore,
        },
    },
};

pub type GutflixService =
    Service<StoreBackend, StoreBackend, StoreBackend, StoreBackend, LlmBackend, SystemClock>;

pub async fn create_service(config: GutflixConfig) -> anyhow::Result<GutflixService> {
    let store = build_store(&config.store).await?;
    let llm = build_llm(&config.llm)?;

    info!(
        store = store.backend(),
        llm_configured = matches!(llm, LlmBackend::AzureOpenAI(_)),
        cache_ttl_secs = config.cache.ttl.as_secs(),
        "gutflix service initialized"
    );

    Ok(Service::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        llm,
        SystemClock,
        config.cache.ttl,
    ))
}

async fn build_store(config: &StoreConfig) -> anyhow::Result<StoreBackend> {
    let store = match config {
        StoreConfig::Postgres(database) => {
            let postgres = Postgres::new(database).await?;
            StoreBackend::Postgres(PostgresStore::new(postgres.get_db()))
        }
        StoreConfig::Supabase(supabase) => StoreBackend::Supabase(SupabaseStore::new(supabase)?),
        StoreConfig::Memory => StoreBackend::Memory(InMemoryStore::new()),
        StoreConfig::Disabled => {
            warn!("no store configured, cache and interaction log are disabled");
            StoreBackend::Disabled
        }
    };

    Ok(store)
}

fn build_llm(config: &LLMConfig) -> anyhow::Result<LlmBackend> {
    match &config.azure_openai {
        Some(azure) => Ok(LlmBackend::AzureOpenAI(AzureOpenAIClient::new(azure)?)),
        None => {
            warn!("Azure OpenAI is not configured, reactions will use the fallback bundle");
            Ok(LlmBackend::Unavailable)
        }
    }
}

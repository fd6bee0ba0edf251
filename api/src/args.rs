use std::{fmt, time::Duration};

use clap::{ArgAction, Parser, ValueEnum};
use gutflix_core::domain::common::{
    AzureOpenAIConfig, CacheConfig, DatabaseConfig, GutflixConfig, LLMConfig, StoreConfig,
    SupabaseConfig,
};
use tracing::warn;

#[derive(Debug, Clone, Parser)]
#[command(name = "gutflix-api", version, about = "Gutflix organ reaction API")]
pub struct Args {
    #[arg(short, long, env = "APP_ENV", value_enum, default_value_t = Environment::Development)]
    pub env: Environment,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub cache: CacheArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8080)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Postgres when `DATABASE_URL` is set, then Supabase, otherwise disabled.
    Auto,
    Postgres,
    Supabase,
    Memory,
    Disabled,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StoreArgs {
    #[arg(
        long = "store-backend",
        env = "STORE_BACKEND",
        value_enum,
        default_value_t = StoreKind::Auto
    )]
    pub backend: StoreKind,

    #[arg(long = "database-url", env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[arg(
        long = "database-run-migrations",
        env = "DATABASE_RUN_MIGRATIONS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub run_migrations: bool,

    #[arg(long = "supabase-url", env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    #[arg(long = "supabase-anon-key", env = "SUPABASE_ANON_KEY")]
    pub supabase_anon_key: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "azure-openai-endpoint", env = "AZURE_OPENAI_ENDPOINT")]
    pub endpoint: Option<String>,

    #[arg(long = "azure-openai-api-key", env = "AZURE_OPENAI_API_KEY")]
    pub api_key: Option<String>,

    #[arg(
        long = "azure-openai-deployment",
        env = "AZURE_OPENAI_DEPLOYMENT",
        default_value = "gpt-4o"
    )]
    pub deployment: String,

    #[arg(
        long = "azure-openai-api-version",
        env = "AZURE_OPENAI_API_VERSION",
        default_value = "2024-10-21"
    )]
    pub api_version: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CacheArgs {
    #[arg(
        long = "reaction-cache-ttl-secs",
        env = "REACTION_CACHE_TTL_SECS",
        default_value_t = 3600
    )]
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Overridden by `RUST_LOG` when set.
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        default_value = "gutflix_api=info,gutflix_core=info,tower_http=info"
    )]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl StoreArgs {
    fn postgres(&self) -> Option<StoreConfig> {
        non_empty(&self.database_url).map(|database_url| {
            StoreConfig::Postgres(DatabaseConfig {
                database_url,
                run_migrations: self.run_migrations,
            })
        })
    }

    fn supabase(&self) -> Option<StoreConfig> {
        let url = non_empty(&self.supabase_url)?;
        let anon_key = non_empty(&self.supabase_anon_key)?;
        Some(StoreConfig::Supabase(SupabaseConfig { url, anon_key }))
    }

    pub fn store_config(&self) -> StoreConfig {
        let selected = match self.backend {
            StoreKind::Auto => self.postgres().or_else(|| self.supabase()),
            StoreKind::Postgres => self.postgres(),
            StoreKind::Supabase => self.supabase(),
            StoreKind::Memory => Some(StoreConfig::Memory),
            StoreKind::Disabled => Some(StoreConfig::Disabled),
        };

        selected.unwrap_or_else(|| {
            if self.backend != StoreKind::Auto {
                warn!(backend = ?self.backend, "store credentials missing, store disabled");
            }
            StoreConfig::Disabled
        })
    }
}

impl LlmArgs {
    pub fn llm_config(&self) -> LLMConfig {
        let azure_openai = match (non_empty(&self.endpoint), non_empty(&self.api_key)) {
            (Some(endpoint), Some(api_key)) => Some(AzureOpenAIConfig {
                endpoint,
                api_key,
                deployment: self.deployment.clone(),
                api_version: self.api_version.clone(),
                timeout: Duration::from_secs(self.timeout_secs),
            }),
            _ => None,
        };

        LLMConfig { azure_openai }
    }
}

impl From<Args> for GutflixConfig {
    fn from(args: Args) -> Self {
        Self {
            store: args.store.store_config(),
            llm: args.llm.llm_config(),
            cache: CacheConfig {
                ttl: Duration::from_secs(args.cache.ttl_secs),
            },
        }
    }
}

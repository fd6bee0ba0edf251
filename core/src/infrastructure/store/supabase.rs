use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::domain::{
    common::{SupabaseConfig, entities::app_errors::CoreError},
    food::FoodType,
    health::ports::HealthCheckRepository,
    interaction::{
        entities::{InteractionLogEntry, PlayerScore},
        ports::{InteractionLogRepository, LeaderboardRepository},
    },
    reaction::{
        entities::{CacheEntry, CacheKey, ReactionBundle},
        ports::ReactionCacheRepository,
    },
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Hosted Postgres reached through its PostgREST interface.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    base_url: String,
    anon_key: String,
    client: Client,
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheRow {
    key: String,
    response: ReactionBundle,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct GutLogRow<'a> {
    id: uuid::Uuid,
    player_name: &'a str,
    food_type: Option<FoodType>,
    food_name: &'a str,
    quantity: u32,
    damage_score: i32,
    logged_at: DateTime<Utc>,
}

impl SupabaseStore {
    pub fn new(config: &SupabaseConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CoreError::StoreError(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            client,
        })
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
    }

    async fn send(&self, request: RequestBuilder, context: &str) -> Result<Response, CoreError> {
        let response = self.authorized(request).send().await.map_err(|e| {
            error!("{}: {}", context, e);
            CoreError::StoreError(format!("{}: {}", context, e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("{}: {} - {}", context, status, error_text);
            return Err(CoreError::StoreError(format!(
                "{}: {} - {}",
                context, status, error_text
            )));
        }

        Ok(response)
    }
}

impl ReactionCacheRepository for SupabaseStore {
    async fn get_cached(&self, key: &CacheKey) -> Result<Option<CacheEntry>, CoreError> {
        let request = self
            .client
            .get(self.rest_url("reaction_cache"))
            .query(&[
                ("key", format!("eq.{}", key)),
                ("select", "key,response,created_at".to_string()),
                ("limit", "1".to_string()),
            ]);

        let rows: Vec<CacheRow> = self
            .send(request, "failed to read reaction cache")
            .await?
            .json()
            .await
            .map_err(|e| {
                error!("Failed to parse reaction cache rows: {}", e);
                CoreError::StoreError(format!("invalid reaction cache rows: {}", e))
            })?;

        Ok(rows
            .into_iter()
            .next()
            .map(|row| CacheEntry::new(CacheKey::from(row.key), row.response, row.created_at)))
    }

    async fn put_cached(&self, entry: CacheEntry) -> Result<(), CoreError> {
        let row = CacheRow {
            key: entry.key.as_str().to_string(),
            response: entry.bundle,
            created_at: entry.created_at,
        };

        let request = self
            .client
            .post(self.rest_url("reaction_cache"))
            .query(&[("on_conflict", "key")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&[row]);

        self.send(request, "failed to upsert reaction cache").await?;
        Ok(())
    }
}

impl InteractionLogRepository for SupabaseStore {
    async fn append_log(&self, entry: InteractionLogEntry) -> Result<(), CoreError> {
        let row = GutLogRow {
            id: entry.id,
            player_name: &entry.player_name,
            food_type: entry.food_type,
            food_name: &entry.food_name,
            quantity: entry.quantity,
            damage_score: entry.damage_score,
            logged_at: entry.logged_at,
        };

        let request = self
            .client
            .post(self.rest_url("gut_logs"))
            .header("Prefer", "return=minimal")
            .json(&row);

        self.send(request, "failed to append gut log").await?;
        Ok(())
    }
}

impl LeaderboardRepository for SupabaseStore {
    async fn read_leaderboard(&self, limit: u32) -> Result<Vec<PlayerScore>, CoreError> {
        let request = self
            .client
            .post(self.rest_url("rpc/get_leaderboard"))
            .json(&json!({ "row_limit": limit }));

        self.send(request, "failed to read leaderboard")
            .await?
            .json()
            .await
            .map_err(|e| {
                error!("Failed to parse leaderboard rows: {}", e);
                CoreError::StoreError(format!("invalid leaderboard rows: {}", e))
            })
    }
}

impl HealthCheckRepository for SupabaseStore {
    fn backend(&self) -> &'static str {
        "supabase"
    }

    async fn ping(&self) -> Result<Option<u64>, CoreError> {
        let started = Instant::now();
        let request = self
            .client
            .get(self.rest_url("reaction_cache"))
            .query(&[("select", "key"), ("limit", "1")]);

        self.send(request, "supabase ping failed").await?;
        Ok(Some(started.elapsed().as_millis() as u64))
    }
}

use std::time::Instant;

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, QueryResult, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
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

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pub db: DatabaseConnection,
}

impl PostgresStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn store_error(context: &str, e: impl std::fmt::Display) -> CoreError {
    error!("{}: {}", context, e);
    CoreError::StoreError(format!("{}: {}", context, e))
}

fn cache_entry_from_row(row: &QueryResult) -> Result<CacheEntry, CoreError> {
    let key: String = row
        .try_get("", "key")
        .map_err(|e| store_error("invalid reaction_cache key", e))?;
    let response: serde_json::Value = row
        .try_get("", "response")
        .map_err(|e| store_error("invalid reaction_cache response", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("", "created_at")
        .map_err(|e| store_error("invalid reaction_cache timestamp", e))?;

    let bundle: ReactionBundle = serde_json::from_value(response)
        .map_err(|e| store_error("cached bundle does not deserialize", e))?;

    Ok(CacheEntry::new(CacheKey::from(key), bundle, created_at))
}

fn player_score_from_row(row: &QueryResult) -> Result<PlayerScore, CoreError> {
    Ok(PlayerScore {
        player_name: row
            .try_get("", "player_name")
            .map_err(|e| store_error("invalid leaderboard row", e))?,
        total_damage: row
            .try_get::<Option<i64>>("", "total_damage")
            .map_err(|e| store_error("invalid leaderboard row", e))?
            .unwrap_or(0),
        meals_logged: row
            .try_get::<Option<i64>>("", "meals_logged")
            .map_err(|e| store_error("invalid leaderboard row", e))?
            .unwrap_or(0),
        last_meal_at: row
            .try_get("", "last_meal_at")
            .map_err(|e| store_error("invalid leaderboard row", e))?,
    })
}

impl ReactionCacheRepository for PostgresStore {
    async fn get_cached(&self, key: &CacheKey) -> Result<Option<CacheEntry>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT key, response, created_at
            FROM reaction_cache
            WHERE key = $1
            "#,
            [key.as_str().into()],
        );

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(|e| store_error("failed to read reaction cache", e))?;

        row.as_ref().map(cache_entry_from_row).transpose()
    }

    async fn put_cached(&self, entry: CacheEntry) -> Result<(), CoreError> {
        let response = serde_json::to_value(&entry.bundle)
            .map_err(|e| store_error("failed to serialize bundle", e))?;

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO reaction_cache (key, response, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE
            SET response = EXCLUDED.response, created_at = EXCLUDED.created_at
            "#,
            [
                entry.key.as_str().into(),
                response.into(),
                entry.created_at.into(),
            ],
        );

        self.db
            .execute(stmt)
            .await
            .map_err(|e| store_error("failed to upsert reaction cache", e))?;

        Ok(())
    }
}

impl InteractionLogRepository for PostgresStore {
    async fn append_log(&self, entry: InteractionLogEntry) -> Result<(), CoreError> {
        let quantity = i32::try_from(entry.quantity)
            .map_err(|_| CoreError::InvalidInput("quantity out of range".to_string()))?;

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO gut_logs (id, player_name, food_type, food_name, quantity, damage_score, logged_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
            [
                entry.id.into(),
                entry.player_name.into(),
                entry.food_type.map(|t| t.slug().to_string()).into(),
                entry.food_name.into(),
                quantity.into(),
                entry.damage_score.into(),
                entry.logged_at.into(),
            ],
        );

        self.db
            .execute(stmt)
            .await
            .map_err(|e| store_error("failed to append gut log", e))?;

        Ok(())
    }
}

impl LeaderboardRepository for PostgresStore {
    async fn read_leaderboard(&self, limit: u32) -> Result<Vec<PlayerScore>, CoreError> {
        let limit = i32::try_from(limit).unwrap_or(i32::MAX);

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                player_name,
                SUM(damage_score)::BIGINT AS total_damage,
                COUNT(*)::BIGINT AS meals_logged,
                MAX(logged_at) AS last_meal_at
            FROM gut_logs
            GROUP BY player_name
            ORDER BY total_damage DESC, player_name ASC
            LIMIT $1
            "#,
            [limit.into()],
        );

        let rows = self
            .db
            .query_all(stmt)
            .await
            .map_err(|e| store_error("failed to read leaderboard", e))?;

        rows.iter().map(player_score_from_row).collect()
    }
}

impl HealthCheckRepository for PostgresStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<Option<u64>, CoreError> {
        let started = Instant::now();
        self.db
            .ping()
            .await
            .map_err(|e| store_error("postgres ping failed", e))?;

        Ok(Some(started.elapsed().as_millis() as u64))
    }
}

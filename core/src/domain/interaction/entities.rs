use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, food::FoodType};

pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// Row of the append-only `gut_logs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InteractionLogEntry {
    pub id: Uuid,
    pub player_name: String,
    pub food_type: Option<FoodType>,
    pub food_name: String,
    pub quantity: u32,
    pub damage_score: i32,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct InteractionLogConfig {
    pub player_name: Option<String>,
    pub food_type: Option<FoodType>,
    pub food_name: String,
    pub quantity: u32,
    pub damage_score: i32,
}

impl InteractionLogEntry {
    pub fn new(config: InteractionLogConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        let player_name = config
            .player_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());

        Self {
            id: Uuid::new_v7(timestamp),
            player_name,
            food_type: config.food_type,
            food_name: config.food_name,
            quantity: config.quantity,
            damage_score: config.damage_score,
            logged_at: now,
        }
    }
}

/// Per-player aggregate as computed by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_name: String,
    pub total_damage: i64,
    pub meals_logged: i64,
    pub last_meal_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub player_name: String,
    pub total_damage: i64,
    pub meals_logged: i64,
    pub last_meal_at: Option<DateTime<Utc>>,
}

impl LeaderboardRow {
    /// `scores` must already be ordered best first.
    pub fn ranked(scores: Vec<PlayerScore>) -> Vec<Self> {
        scores
            .into_iter()
            .zip(1u32..)
            .map(|(score, rank)| Self {
                rank,
                player_name: score.player_name,
                total_damage: score.total_damage,
                meals_logged: score.meals_logged,
                last_meal_at: score.last_meal_at,
            })
            .collect()
    }
}

/// Whether leaderboard rows come from the store or from the canned sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardSource {
    Live,
    Sample,
}

/// Aggregate log entries the way the store-side `get_leaderboard` function does:
/// sum of damage per player, highest total first, ties broken by name.
pub fn aggregate_scores(entries: &[InteractionLogEntry], limit: usize) -> Vec<PlayerScore> {
    let mut scores: Vec<PlayerScore> = Vec::new();

    for entry in entries {
        match scores
            .iter_mut()
            .find(|score| score.player_name == entry.player_name)
        {
            Some(score) => {
                score.total_damage += i64::from(entry.damage_score);
                score.meals_logged += 1;
                score.last_meal_at = score.last_meal_at.max(Some(entry.logged_at));
            }
            None => scores.push(PlayerScore {
                player_name: entry.player_name.clone(),
                total_damage: i64::from(entry.damage_score),
                meals_logged: 1,
                last_meal_at: Some(entry.logged_at),
            }),
        }
    }

    scores.sort_by(|a, b| {
        b.total_damage
            .cmp(&a.total_damage)
            .then_with(|| a.player_name.cmp(&b.player_name))
    });
    scores.truncate(limit);
    scores
}

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::interaction::entities::{LeaderboardRow, PlayerScore};

/// Canned leaderboard served when the store cannot be read, so the table is never empty.
pub fn sample_leaderboard(now: DateTime<Utc>) -> Vec<LeaderboardRow> {
    LeaderboardRow::ranked(vec![
        PlayerScore {
            player_name: "Alex".to_string(),
            total_damage: 300,
            meals_logged: 1,
            last_meal_at: Some(now - TimeDelta::hours(2)),
        },
        PlayerScore {
            player_name: "John".to_string(),
            total_damage: 150,
            meals_logged: 1,
            last_meal_at: Some(now),
        },
        PlayerScore {
            player_name: "Jane".to_string(),
            total_damage: 120,
            meals_logged: 1,
            last_meal_at: Some(now - TimeDelta::hours(1)),
        },
    ])
}

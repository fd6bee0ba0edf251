use crate::domain::food::FoodType;

pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 10;
pub const MAX_LEADERBOARD_LIMIT: u32 = 100;

/// Interaction produced by a dialogue generation.
#[derive(Debug, Clone)]
pub struct RecordInteractionInput {
    pub player_name: Option<String>,
    pub food_type: FoodType,
    pub quantity: u32,
}

/// Meal explicitly logged by the client.
#[derive(Debug, Clone)]
pub struct LogMealInput {
    pub player_name: String,
    pub food_name: String,
    pub damage_score: i32,
    pub food_type: Option<FoodType>,
    pub quantity: Option<u32>,
}

pub fn clamp_leaderboard_limit(limit: Option<u32>) -> u32 {
    limit
        .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
        .clamp(1, MAX_LEADERBOARD_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_leaderboard_limit() {
        assert_eq!(clamp_leaderboard_limit(None), 10);
        assert_eq!(clamp_leaderboard_limit(Some(0)), 1);
        assert_eq!(clamp_leaderboard_limit(Some(25)), 25);
        assert_eq!(clamp_leaderboard_limit(Some(5000)), 100);
    }
}

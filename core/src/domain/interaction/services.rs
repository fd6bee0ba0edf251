use tracing::{error, info};

use crate::domain::{
    common::{clock::Clock, entities::app_errors::CoreError, services::Service},
    food::{FoodType, catalog},
    health::ports::HealthCheckRepository,
    interaction::{
        entities::{InteractionLogConfig, InteractionLogEntry, LeaderboardRow},
        ports::{InteractionLogRepository, InteractionService, LeaderboardRepository},
        value_objects::{LogMealInput, MAX_LEADERBOARD_LIMIT, RecordInteractionInput},
    },
    reaction::ports::{LLMClient, ReactionCacheRepository},
};

impl<RC, IL, LB, HC, LLM, CL> InteractionService for Service<RC, IL, LB, HC, LLM, CL>
where
    RC: ReactionCacheRepository,
    IL: InteractionLogRepository,
    LB: LeaderboardRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    CL: Clock,
{
    async fn record_interaction(
        &self,
        input: RecordInteractionInput,
    ) -> Result<InteractionLogEntry, CoreError> {
        let item = catalog::find_by_type(input.food_type);
        let quantity = input.quantity.max(1);
        let damage_score = item
            .damage_score
            .saturating_mul(i32::try_from(quantity).unwrap_or(i32::MAX));

        let entry = InteractionLogEntry::new(InteractionLogConfig {
            player_name: input.player_name,
            food_type: Some(input.food_type),
            food_name: item.name.to_string(),
            quantity,
            damage_score,
        });

        self.interaction_log_repository
            .append_log(entry.clone())
            .await
            .map_err(|e| {
                error!(
                    food_type = %input.food_type,
                    error = %e,
                    "failed to append interaction log"
                );
                e
            })?;

        Ok(entry)
    }

    async fn log_meal(&self, input: LogMealInput) -> Result<InteractionLogEntry, CoreError> {
        let player_name = input.player_name.trim();
        let food_name = input.food_name.trim();

        if player_name.is_empty() {
            return Err(CoreError::InvalidInput("playerName is required".to_string()));
        }
        if food_name.is_empty() {
            return Err(CoreError::InvalidInput("foodName is required".to_string()));
        }

        let food_type: Option<FoodType> = input
            .food_type
            .or_else(|| catalog::find_by_name(food_name).map(|item| item.food_type));

        let entry = InteractionLogEntry::new(InteractionLogConfig {
            player_name: Some(player_name.to_string()),
            food_type,
            food_name: food_name.to_string(),
            quantity: input.quantity.unwrap_or(1).max(1),
            damage_score: input.damage_score,
        });

        self.interaction_log_repository
            .append_log(entry.clone())
            .await?;

        info!(player_name = %entry.player_name, food_name = %entry.food_name, "meal logged");
        Ok(entry)
    }

    async fn get_leaderboard(&self, limit: u32) -> Result<Vec<LeaderboardRow>, CoreError> {
        let limit = limit.clamp(1, MAX_LEADERBOARD_LIMIT);
        let scores = self.leaderboard_repository.read_leaderboard(limit).await?;

        Ok(LeaderboardRow::ranked(scores))
    }
}

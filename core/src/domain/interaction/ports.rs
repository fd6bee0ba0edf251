use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    interaction::{
        entities::{InteractionLogEntry, LeaderboardRow, PlayerScore},
        value_objects::{LogMealInput, RecordInteractionInput},
    },
};

/// Repository trait for the append-only interaction log
#[cfg_attr(test, mockall::automock)]
pub trait InteractionLogRepository: Send + Sync {
    fn append_log(
        &self,
        entry: InteractionLogEntry,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository trait for the store-side score aggregation
#[cfg_attr(test, mockall::automock)]
pub trait LeaderboardRepository: Send + Sync {
    /// Players ordered by total damage, highest first.
    fn read_leaderboard(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<PlayerScore>, CoreError>> + Send;
}

/// Service trait for interaction logging and ranking
#[cfg_attr(test, mockall::automock)]
pub trait InteractionService: Send + Sync {
    fn record_interaction(
        &self,
        input: RecordInteractionInput,
    ) -> impl Future<Output = Result<InteractionLogEntry, CoreError>> + Send;

    fn log_meal(
        &self,
        input: LogMealInput,
    ) -> impl Future<Output = Result<InteractionLogEntry, CoreError>> + Send;

    fn get_leaderboard(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<LeaderboardRow>, CoreError>> + Send;
}

use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    reaction::{
        entities::{CacheEntry, CacheKey},
        value_objects::{CompletionRequest, GetReactionsInput, ReactionOutcome},
    },
};

/// LLM Client trait for calling the upstream completion service
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// `false` when no upstream credentials were configured.
    fn is_configured(&self) -> bool;

    /// Returns the raw text content of the first completion choice.
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Repository trait for the generated content cache
#[cfg_attr(test, mockall::automock)]
pub trait ReactionCacheRepository: Send + Sync {
    fn get_cached(
        &self,
        key: &CacheKey,
    ) -> impl Future<Output = Result<Option<CacheEntry>, CoreError>> + Send;

    /// Insert or overwrite the entry stored under `entry.key`.
    fn put_cached(&self, entry: CacheEntry) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for organ reaction generation
#[cfg_attr(test, mockall::automock)]
pub trait ReactionService: Send + Sync {
    /// Never fails: any problem past validation yields the fallback bundle.
    fn get_reactions(
        &self,
        input: GetReactionsInput,
    ) -> impl Future<Output = ReactionOutcome> + Send;
}

use tracing::{debug, info, warn};

use crate::domain::{
    common::{clock::Clock, entities::app_errors::CoreError, services::Service},
    food::catalog,
    health::ports::HealthCheckRepository,
    interaction::ports::{InteractionLogRepository, LeaderboardRepository},
    reaction::{
        entities::{CacheEntry, CacheKey, ReactionBundle},
        inflight::Flight,
        ports::{LLMClient, ReactionCacheRepository, ReactionService},
        prompts::{system_prompt, user_prompt},
        value_objects::{
            CompletionRequest, GENERATION_MAX_TOKENS, GENERATION_TEMPERATURE, GetReactionsInput,
            ReactionOrigin, ReactionOutcome,
        },
    },
};

impl<RC, IL, LB, HC, LLM, CL> Service<RC, IL, LB, HC, LLM, CL>
where
    RC: ReactionCacheRepository,
    LLM: LLMClient,
    CL: Clock,
{
    async fn fresh_cached(&self, key: &CacheKey) -> Option<ReactionBundle> {
        match self.reaction_cache_repository.get_cached(key).await {
            Ok(Some(entry)) if entry.is_fresh(self.clock.now(), self.cache_ttl) => {
                Some(entry.bundle)
            }
            Ok(Some(_)) => {
                debug!(cache_key = %key, "cached reactions are stale");
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!(cache_key = %key, error = %e, "cache lookup failed, treating as a miss");
                None
            }
        }
    }

    async fn generate(&self, input: GetReactionsInput) -> Result<ReactionBundle, CoreError> {
        if !self.llm_client.is_configured() {
            return Err(CoreError::LlmUnavailable);
        }

        let item = catalog::find_by_type(input.food_type);
        let request = CompletionRequest {
            system_prompt: system_prompt(input.food_type).to_string(),
            user_prompt: user_prompt(item, input.quantity),
            temperature: GENERATION_TEMPERATURE,
            max_tokens: GENERATION_MAX_TOKENS,
            json_response: true,
        };

        let content = self.llm_client.complete(request).await?;
        ReactionBundle::parse_completion(&content)
    }

    async fn generate_and_store(
        &self,
        key: &CacheKey,
        input: GetReactionsInput,
    ) -> ReactionOutcome {
        // The previous leader for this key may have filled the cache just now.
        if let Some(bundle) = self.fresh_cached(key).await {
            debug!(cache_key = %key, "cache filled by concurrent request");
            return ReactionOutcome::cached(bundle);
        }

        info!(cache_key = %key, "cache miss, generating reactions");
        let bundle = match self.generate(input).await {
            Ok(bundle) => bundle,
            Err(e) => {
                warn!(cache_key = %key, error = %e, "reaction generation failed, using fallback");
                return ReactionOutcome::fallback();
            }
        };

        let entry = CacheEntry::new(key.clone(), bundle.clone(), self.clock.now());
        if let Err(e) = self.reaction_cache_repository.put_cached(entry).await {
            warn!(cache_key = %key, error = %e, "failed to cache generated reactions");
        }

        ReactionOutcome::generated(bundle)
    }
}

impl<RC, IL, LB, HC, LLM, CL> ReactionService for Service<RC, IL, LB, HC, LLM, CL>
where
    RC: ReactionCacheRepository,
    IL: InteractionLogRepository,
    LB: LeaderboardRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    CL: Clock,
{
    async fn get_reactions(&self, input: GetReactionsInput) -> ReactionOutcome {
        let key = CacheKey::new(input.food_type, input.quantity);

        if let Some(bundle) = self.fresh_cached(&key).await {
            debug!(cache_key = %key, "cache hit");
            return ReactionOutcome::cached(bundle);
        }

        loop {
            match self.inflight.join(key.as_str()) {
                Flight::Leader(leader) => {
                    let outcome = self.generate_and_store(&key, input).await;
                    leader.complete(outcome.clone());
                    return outcome;
                }
                Flight::Follower(follower) => {
                    debug!(cache_key = %key, "waiting on in-flight generation");
                    match follower.wait().await {
                        // Followers see a generated bundle as served from cache.
                        Some(ReactionOutcome {
                            bundle,
                            origin: ReactionOrigin::Generated,
                        }) => return ReactionOutcome::cached(bundle),
                        Some(outcome) => return outcome,
                        // Leader was cancelled before finishing; take over.
                        None => continue,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    use chrono::{DateTime, TimeDelta, Utc};

    use super::*;
    use crate::{
        domain::{
            food::FoodType,
            reaction::entities::Mood,
        },
        infrastructure::store::memory::InMemoryStore,
    };

    const COMPLETION: &str = r#"{
        "reactions": [
            {"character": "Gut Flora Fiona 🦠", "dialogue": "Fresh recruits!", "timestamp": 0, "mood": "happy", "emoji": "🎉"},
            {"character": "Taste Bud Tim 👅", "dialogue": "Vinegar? Bold.", "timestamp": 2, "mood": "confused", "emoji": "🤔"},
            {"character": "Liver Larry 🍵", "dialogue": "Finally a day off.", "timestamp": 4, "mood": "happy", "emoji": "😌"},
            {"character": "Bloaty Bill 💨", "dialogue": "Pressure rising.", "timestamp": 6, "mood": "panic", "emoji": "😬"}
        ],
        "medical_context": "Fermented drinks contain live cultures.",
        "humor_level": 7
    }"#;

    #[derive(Clone)]
    struct StubLlm {
        configured: bool,
        content: Result<String, CoreError>,
        delay: Duration,
        calls: Arc<AtomicUsize>,
        requests: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl StubLlm {
        fn replying(content: &str) -> Self {
            Self {
                configured: true,
                content: Ok(content.to_string()),
                delay: Duration::ZERO,
                calls: Arc::new(AtomicUsize::new(0)),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing(error: CoreError) -> Self {
            Self {
                content: Err(error),
                ..Self::replying("")
            }
        }

        fn unconfigured() -> Self {
            Self {
                configured: false,
                ..Self::replying(COMPLETION)
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl LLMClient for StubLlm {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.content.clone()
        }
    }

    #[derive(Clone)]
    struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

    impl ManualClock {
        fn new() -> Self {
            Self(Arc::new(Mutex::new(Utc::now())))
        }

        fn advance(&self, by: TimeDelta) {
            *self.0.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    type TestService =
        Service<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore, StubLlm, ManualClock>;

    fn service(store: &InMemoryStore, llm: &StubLlm, clock: &ManualClock) -> TestService {
        Service::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            llm.clone(),
            clock.clone(),
            Duration::from_secs(3600),
        )
    }

    fn kombucha(quantity: u32) -> GetReactionsInput {
        GetReactionsInput {
            food_type: FoodType::Kombucha,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_generates_then_serves_from_cache() {
        let store = InMemoryStore::new();
        let llm = StubLlm::replying(COMPLETION);
        let clock = ManualClock::new();
        let service = service(&store, &llm, &clock);

        let first = service.get_reactions(kombucha(1)).await;
        assert_eq!(first.origin, ReactionOrigin::Generated);
        assert_eq!(first.bundle.reactions.len(), 4);
        assert_eq!(first.bundle.reactions[3].mood, Mood::Panic);

        let second = service.get_reactions(kombucha(1)).await;
        assert_eq!(second.origin, ReactionOrigin::Cache);
        assert_eq!(
            serde_json::to_vec(&second.bundle).unwrap(),
            serde_json::to_vec(&first.bundle).unwrap()
        );
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_builds_request_from_catalog() {
        let store = InMemoryStore::new();
        let llm = StubLlm::replying(COMPLETION);
        let clock = ManualClock::new();
        let service = service(&store, &llm, &clock);

        service.get_reactions(kombucha(2)).await;

        let requests = llm.requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.temperature, GENERATION_TEMPERATURE);
        assert_eq!(request.max_tokens, GENERATION_MAX_TOKENS);
        assert!(request.json_response);
        assert!(request.system_prompt.contains("Gut Flora Fiona"));
        assert!(request.user_prompt.contains("consumed 2 Kombuchas"));
    }

    #[tokio::test]
    async fn test_regenerates_after_ttl_expiry() {
        let store = InMemoryStore::new();
        let llm = StubLlm::replying(COMPLETION);
        let clock = ManualClock::new();
        let service = service(&store, &llm, &clock);

        service.get_reactions(kombucha(1)).await;
        clock.advance(TimeDelta::minutes(59));
        assert_eq!(
            service.get_reactions(kombucha(1)).await.origin,
            ReactionOrigin::Cache
        );

        clock.advance(TimeDelta::minutes(2));
        let third = service.get_reactions(kombucha(1)).await;
        assert_eq!(third.origin, ReactionOrigin::Generated);
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_quantity_is_part_of_the_key() {
        let store = InMemoryStore::new();
        let llm = StubLlm::replying(COMPLETION);
        let clock = ManualClock::new();
        let service = service(&store, &llm, &clock);

        service.get_reactions(kombucha(1)).await;
        service.get_reactions(kombucha(2)).await;
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_unconfigured_llm_falls_back_without_calling() {
        let store = InMemoryStore::new();
        let llm = StubLlm::unconfigured();
        let clock = ManualClock::new();
        let service = service(&store, &llm, &clock);

        let outcome = service.get_reactions(kombucha(1)).await;
        assert_eq!(outcome.origin, ReactionOrigin::Fallback);
        assert!(outcome.bundle.is_fallback());
        assert_eq!(llm.calls(), 0);
        assert!(store.cached_keys().await.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_and_garbage_fall_back() {
        let clock = ManualClock::new();

        for llm in [
            StubLlm::failing(CoreError::ExternalServiceError("boom".to_string())),
            StubLlm::replying(""),
            StubLlm::replying("I am not JSON"),
            StubLlm::replying(r#"{"reactions": {"oops": true}}"#),
        ] {
            let store = InMemoryStore::new();
            let service = service(&store, &llm, &clock);

            let outcome = service.get_reactions(kombucha(1)).await;
            assert_eq!(outcome, ReactionOutcome::fallback());
            assert!(store.cached_keys().await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_generation() {
        let store = InMemoryStore::new();
        let llm = StubLlm {
            delay: Duration::from_millis(50),
            ..StubLlm::replying(COMPLETION)
        };
        let clock = ManualClock::new();
        let service = service(&store, &llm, &clock);

        let outcomes =
            futures::future::join_all((0..5).map(|_| service.get_reactions(kombucha(1)))).await;

        assert_eq!(llm.calls(), 1);
        assert_eq!(
            outcomes
                .iter()
                .filter(|o| o.origin == ReactionOrigin::Generated)
                .count(),
            1
        );
        assert!(outcomes.iter().all(|o| o.bundle == outcomes[0].bundle));
        assert!(service.inflight.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_failed_generation() {
        let store = InMemoryStore::new();
        let llm = StubLlm {
            delay: Duration::from_millis(200),
            ..StubLlm::failing(CoreError::ExternalServiceError("upstream timeout".to_string()))
        };
        let clock = ManualClock::new();
        let service = service(&store, &llm, &clock);

        let started = std::time::Instant::now();
        let outcomes =
            futures::future::join_all((0..5).map(|_| service.get_reactions(kombucha(1)))).await;
        let elapsed = started.elapsed();

        assert_eq!(llm.calls(), 1);
        assert!(outcomes.iter().all(|o| *o == ReactionOutcome::fallback()));
        assert!(elapsed < Duration::from_millis(600), "waiters queued: {elapsed:?}");
        assert!(service.inflight.is_empty());
        assert!(store.cached_keys().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_generation_is_retried_by_the_next_request() {
        let store = InMemoryStore::new();
        let llm = StubLlm::failing(CoreError::ExternalServiceError("boom".to_string()));
        let clock = ManualClock::new();
        let service = service(&store, &llm, &clock);

        service.get_reactions(kombucha(1)).await;
        service.get_reactions(kombucha(1)).await;
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_leader_hands_over_to_a_waiter() {
        let store = InMemoryStore::new();
        let llm = StubLlm {
            delay: Duration::from_millis(100),
            ..StubLlm::replying(COMPLETION)
        };
        let clock = ManualClock::new();
        let service = service(&store, &llm, &clock);

        let leader =
            tokio::time::timeout(Duration::from_millis(20), service.get_reactions(kombucha(1)));
        let waiter = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            service.get_reactions(kombucha(1)).await
        };
        let (cancelled, outcome) = tokio::join!(leader, waiter);

        assert!(cancelled.is_err());
        assert_eq!(outcome.origin, ReactionOrigin::Generated);
        assert_eq!(llm.calls(), 2);
        assert!(service.inflight.is_empty());
    }

    #[tokio::test]
    async fn test_cache_write_failure_still_returns_generated_bundle() {
        let store = InMemoryStore::new();
        store.fail_writes(true);
        let llm = StubLlm::replying(COMPLETION);
        let clock = ManualClock::new();
        let service = service(&store, &llm, &clock);

        let outcome = service.get_reactions(kombucha(1)).await;
        assert_eq!(outcome.origin, ReactionOrigin::Generated);
        assert_eq!(outcome.bundle.reactions.len(), 4);
        assert_eq!(outcome.bundle.humor_level, 7);
        assert!(store.cached_keys().await.is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_cache_is_a_miss() {
        let store = InMemoryStore::new();
        store.fail_reads(true);
        let llm = StubLlm::replying(COMPLETION);
        let clock = ManualClock::new();
        let service = service(&store, &llm, &clock);

        let outcome = service.get_reactions(kombucha(1)).await;
        assert_eq!(outcome.origin, ReactionOrigin::Generated);
    }
}

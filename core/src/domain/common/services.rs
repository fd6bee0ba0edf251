use std::{sync::Arc, time::Duration};

use crate::domain::reaction::{inflight::InflightTable, value_objects::ReactionOutcome};

/// Application service wiring every port together.
///
/// The port implementations are injected once at startup (see
/// [`crate::application::create_service`]) and the service is cheap to clone
/// into request handlers.
#[derive(Clone)]
pub struct Service<RC, IL, LB, HC, LLM, CL> {
    pub(crate) reaction_cache_repository: RC,
    pub(crate) interaction_log_repository: IL,
    pub(crate) leaderboard_repository: LB,
    pub(crate) health_check_repository: HC,
    pub(crate) llm_client: LLM,
    pub(crate) clock: CL,
    pub(crate) cache_ttl: Duration,
    pub(crate) inflight: Arc<InflightTable<ReactionOutcome>>,
}

impl<RC, IL, LB, HC, LLM, CL> Service<RC, IL, LB, HC, LLM, CL> {
    pub fn new(
        reaction_cache_repository: RC,
        interaction_log_repository: IL,
        leaderboard_repository: LB,
        health_check_repository: HC,
        llm_client: LLM,
        clock: CL,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            reaction_cache_repository,
            interaction_log_repository,
            leaderboard_repository,
            health_check_repository,
            llm_client,
            clock,
            cache_ttl,
            inflight: Arc::new(InflightTable::default()),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }
}

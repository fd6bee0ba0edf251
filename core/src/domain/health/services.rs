use tracing::warn;

use crate::domain::{
    common::{clock::Clock, services::Service},
    health::{
        entities::{ComponentStatus, HealthReport, StoreHealthStatus},
        ports::{HealthCheckRepository, HealthCheckService},
    },
    interaction::ports::{InteractionLogRepository, LeaderboardRepository},
    reaction::ports::{LLMClient, ReactionCacheRepository},
};

impl<RC, IL, LB, HC, LLM, CL> HealthCheckService for Service<RC, IL, LB, HC, LLM, CL>
where
    RC: ReactionCacheRepository,
    IL: InteractionLogRepository,
    LB: LeaderboardRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    CL: Clock,
{
    async fn health(&self) -> HealthReport {
        let backend = self.health_check_repository.backend().to_string();

        let store = match self.health_check_repository.ping().await {
            Ok(Some(latency_ms)) => StoreHealthStatus {
                backend,
                status: ComponentStatus::Up,
                latency_ms: Some(latency_ms),
                error: None,
            },
            Ok(None) => StoreHealthStatus {
                backend,
                status: ComponentStatus::Disabled,
                latency_ms: None,
                error: None,
            },
            Err(e) => {
                warn!(backend = %backend, error = %e, "store health check failed");
                StoreHealthStatus {
                    backend,
                    status: ComponentStatus::Down,
                    latency_ms: None,
                    error: Some(e.to_string()),
                }
            }
        };

        let llm = if self.llm_client.is_configured() {
            ComponentStatus::Up
        } else {
            ComponentStatus::Disabled
        };

        HealthReport { store, llm }
    }
}

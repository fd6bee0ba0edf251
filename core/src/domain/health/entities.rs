use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Up,
    Down,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StoreHealthStatus {
    pub backend: String,
    pub status: ComponentStatus,
    /// Round trip of the ping in milliseconds, when the store answered.
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthReport {
    pub store: StoreHealthStatus,
    pub llm: ComponentStatus,
}

impl HealthReport {
    /// The service degrades gracefully without either dependency, so only a
    /// configured store that stopped answering counts as unhealthy.
    pub fn is_healthy(&self) -> bool {
        self.store.status != ComponentStatus::Down
    }
}

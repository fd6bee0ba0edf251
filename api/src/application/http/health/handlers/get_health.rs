use axum::extract::State;
use gutflix_core::domain::health::{
    entities::{ComponentStatus, StoreHealthStatus},
    ports::HealthCheckService,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when a configured store stopped answering.
    pub status: String,
    pub store: StoreHealthStatus,
    pub llm: ComponentStatus,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Service health",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn get_health(State(state): State<AppState>) -> Response<HealthResponse> {
    let report = state.service.health().await;
    let status = if report.is_healthy() { "ok" } else { "degraded" };

    Response::OK(HealthResponse {
        status: status.to_string(),
        store: report.store,
        llm: report.llm,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

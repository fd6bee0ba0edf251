use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderName, HeaderValue},
};
use chrono::Utc;
use gutflix_core::domain::interaction::{
    entities::{LeaderboardRow, LeaderboardSource},
    ports::InteractionService,
    sample::sample_leaderboard,
};
use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::application::http::{
    query_params::QueryParamsExt,
    server::{api_entities::response::Response, app_state::AppState},
};

pub const MOCK_DATA_HEADER: &str = "x-mock-data";

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardRow>,
    pub source: LeaderboardSource,
}

fn sample_response(limit: u32) -> (HeaderMap, Response<LeaderboardResponse>) {
    let mut leaderboard = sample_leaderboard(Utc::now());
    leaderboard.truncate(limit as usize);

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(MOCK_DATA_HEADER),
        HeaderValue::from_static("true"),
    );

    (
        headers,
        Response::OK(LeaderboardResponse {
            leaderboard,
            source: LeaderboardSource::Sample,
        }),
    )
}

#[utoipa::path(
    get,
    path = "",
    tag = "leaderboard",
    summary = "Get leaderboard",
    description = "Players ranked by total damage. Always answers 200; when the store is unavailable or empty a sample leaderboard is served with `X-Mock-Data: true`.",
    params(
        ("limit" = Option<u32>, Query, description = "Rows to return, 1 to 100, default 10"),
    ),
    responses(
        (status = 200, body = LeaderboardResponse)
    )
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> (HeaderMap, Response<LeaderboardResponse>) {
    let params = query.parse_leaderboard_params();

    match state.service.get_leaderboard(params.limit).await {
        Ok(leaderboard) if !leaderboard.is_empty() => (
            HeaderMap::new(),
            Response::OK(LeaderboardResponse {
                leaderboard,
                source: LeaderboardSource::Live,
            }),
        ),
        Ok(_) => {
            info!("leaderboard is empty, serving sample data");
            sample_response(params.limit)
        }
        Err(e) => {
            warn!(error = %e, "failed to read leaderboard, serving sample data");
            sample_response(params.limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_response_is_flagged_and_truncated() {
        let (headers, Response::OK(body)) = sample_response(2) else {
            panic!("sample must be a 200");
        };

        assert_eq!(headers.get(MOCK_DATA_HEADER).unwrap(), "true");
        assert_eq!(body.source, LeaderboardSource::Sample);
        let names: Vec<&str> = body
            .leaderboard
            .iter()
            .map(|row| row.player_name.as_str())
            .collect();
        assert_eq!(names, vec!["Alex", "John"]);
    }
}

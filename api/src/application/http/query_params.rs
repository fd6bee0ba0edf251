use std::collections::HashMap;

use gutflix_core::domain::interaction::value_objects::clamp_leaderboard_limit;

/// Leaderboard query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardParams {
    pub limit: u32,
}

impl LeaderboardParams {
    pub fn new(limit: Option<i64>) -> Self {
        // Out of range values are clamped rather than rejected.
        let limit = limit.map(|l| u32::try_from(l.max(0)).unwrap_or(u32::MAX));
        Self {
            limit: clamp_leaderboard_limit(limit),
        }
    }

    /// Parse from query string map, ignoring values that are not integers
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let limit = query_map
            .get("limit")
            .and_then(|value| value.trim().parse::<i64>().ok());

        Self::new(limit)
    }
}

/// Helper trait for reading typed parameters out of a raw query map
pub trait QueryParamsExt {
    fn parse_leaderboard_params(&self) -> LeaderboardParams;
}

impl QueryParamsExt for HashMap<String, String> {
    fn parse_leaderboard_params(&self) -> LeaderboardParams {
        LeaderboardParams::from_query_map(self)
    }
}

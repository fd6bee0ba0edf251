use super::handlers::get_leaderboard::{__path_get_leaderboard, get_leaderboard};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_leaderboard))]
pub struct LeaderboardApiDoc;

pub fn leaderboard_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/leaderboard", state.args.server.root_path),
        get(get_leaderboard),
    )
}

use super::handlers::log_meal::{__path_log_meal, log_meal};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(log_meal))]
pub struct MealApiDoc;

pub fn meal_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/log-meal", state.args.server.root_path),
        post(log_meal),
    )
}

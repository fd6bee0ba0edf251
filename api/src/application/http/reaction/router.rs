use super::handlers::generate_dialogue::{__path_generate_dialogue, generate_dialogue};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_dialogue))]
pub struct ReactionApiDoc;

pub fn reaction_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/generate-dialogue", state.args.server.root_path),
        post(generate_dialogue),
    )
}

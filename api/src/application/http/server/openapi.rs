use crate::application::http::{
    food::router::FoodApiDoc, health::router::HealthApiDoc,
    leaderboard::router::LeaderboardApiDoc, meal::router::MealApiDoc,
    reaction::router::ReactionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gutflix API"
    ),
    nest(
        (path = "/api/generate-dialogue", api = ReactionApiDoc),
        (path = "/api/log-meal", api = MealApiDoc),
        (path = "/api/leaderboard", api = LeaderboardApiDoc),
        (path = "/api/foods", api = FoodApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

use axum::extract::State;
use gutflix_core::domain::{
    common::entities::app_errors::CoreError,
    interaction::{
        entities::InteractionLogEntry, ports::InteractionService, value_objects::LogMealInput,
    },
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    meal::validators::LogMealValidator,
    reaction::handlers::generate_dialogue::parse_food_type,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct LogMealResponse {
    pub message: String,
    pub data: Vec<InteractionLogEntry>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal",
    summary = "Log a meal",
    description = "Appends a meal to the interaction log that feeds the leaderboard.",
    request_body = LogMealValidator,
    responses(
        (status = 200, body = LogMealResponse),
        (status = 400, body = ErrorBody, description = "Missing or invalid fields"),
        (status = 500, body = ErrorBody, description = "The store rejected the write")
    )
)]
pub async fn log_meal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LogMealValidator>,
) -> Result<Response<LogMealResponse>, ApiError> {
    let food_type = payload
        .food_type
        .as_deref()
        .map(parse_food_type)
        .transpose()?;

    let entry = state
        .service
        .log_meal(LogMealInput {
            player_name: payload.player_name.unwrap_or_default(),
            food_name: payload.food_name.unwrap_or_default(),
            damage_score: payload.damage_score.unwrap_or_default(),
            food_type,
            quantity: payload.quantity,
        })
        .await
        .map_err(|e| match e {
            CoreError::InvalidInput(_) => ApiError::from(e),
            e => {
                tracing::error!("Failed to log meal: {}", e);
                let error = ApiError::internal("Failed to log meal");
                if state.args.env.is_development() {
                    error.with_details(e.to_string())
                } else {
                    error
                }
            }
        })?;

    Ok(Response::OK(LogMealResponse {
        message: "Meal logged successfully!".to_string(),
        data: vec![entry],
    }))
}

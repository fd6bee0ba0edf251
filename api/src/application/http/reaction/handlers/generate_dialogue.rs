use axum::extract::State;
use gutflix_core::domain::{
    food::FoodType,
    interaction::{ports::InteractionService, value_objects::RecordInteractionInput},
    reaction::{
        entities::ReactionBundle,
        ports::ReactionService,
        value_objects::{GetReactionsInput, ReactionOrigin},
    },
};
use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::application::http::{
    reaction::validators::GenerateDialogueValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDialogueResponse {
    pub success: bool,
    pub food_type: FoodType,
    pub quantity: u32,
    /// `cache`, `generated` or `fallback`.
    pub source: ReactionOrigin,
    #[serde(flatten)]
    pub bundle: ReactionBundle,
}

pub fn parse_food_type(raw: &str) -> Result<FoodType, ApiError> {
    raw.parse::<FoodType>().map_err(|_| {
        ApiError::bad_request("Invalid foodType").with_details(format!(
            "foodType must be one of: {}",
            FoodType::accepted_slugs()
        ))
    })
}

#[utoipa::path(
    post,
    path = "",
    tag = "reaction",
    summary = "Generate organ reactions",
    description = "Returns the organ dialogue for a food and quantity, served from cache when fresh. Upstream failures yield the fallback bundle with a 200.",
    request_body = GenerateDialogueValidator,
    responses(
        (status = 200, body = GenerateDialogueResponse),
        (status = 400, body = ErrorBody, description = "Missing or unknown foodType, or quantity out of range")
    )
)]
pub async fn generate_dialogue(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateDialogueValidator>,
) -> Result<Response<GenerateDialogueResponse>, ApiError> {
    let food_type = parse_food_type(payload.food_type.as_deref().unwrap_or_default())?;
    let quantity = payload.quantity.unwrap_or(1);

    let outcome = state
        .service
        .get_reactions(GetReactionsInput {
            food_type,
            quantity,
        })
        .await;

    info!(food_type = %food_type, quantity, source = ?outcome.origin, "reactions served");

    if let Err(e) = state
        .service
        .record_interaction(RecordInteractionInput {
            player_name: payload.player_name,
            food_type,
            quantity,
        })
        .await
    {
        warn!(food_type = %food_type, error = %e, "failed to record interaction");
    }

    Ok(Response::OK(GenerateDialogueResponse {
        success: true,
        food_type,
        quantity,
        source: outcome.origin,
        bundle: outcome.bundle,
    }))
}

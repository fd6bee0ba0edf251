use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogMealValidator {
    #[validate(
        required(message = "Missing required fields: foodName, damageScore, playerName"),
        length(min = 1, message = "foodName must not be empty")
    )]
    pub food_name: Option<String>,

    #[validate(required(message = "Missing required fields: foodName, damageScore, playerName"))]
    pub damage_score: Option<i32>,

    #[validate(
        required(message = "Missing required fields: foodName, damageScore, playerName"),
        length(min = 1, max = 64, message = "playerName must be 1 to 64 characters")
    )]
    pub player_name: Option<String>,

    #[serde(default)]
    pub food_type: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, max = 99, message = "quantity must be between 1 and 99"))]
    pub quantity: Option<u32>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDialogueValidator {
    /// One of the catalog slugs, e.g. `kombucha`.
    #[validate(required(message = "foodType is required"))]
    pub food_type: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, max = 99, message = "quantity must be between 1 and 99"))]
    pub quantity: Option<u32>,

    #[serde(default)]
    #[validate(length(max = 64, message = "playerName must be at most 64 characters"))]
    pub player_name: Option<String>,
}

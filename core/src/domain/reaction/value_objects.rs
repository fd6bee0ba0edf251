use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{food::FoodType, reaction::entities::ReactionBundle};

pub const GENERATION_TEMPERATURE: f32 = 0.8;
pub const GENERATION_MAX_TOKENS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetReactionsInput {
    pub food_type: FoodType,
    pub quantity: u32,
}

/// Where the bundle of a [`ReactionOutcome`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReactionOrigin {
    Cache,
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReactionOutcome {
    pub bundle: ReactionBundle,
    pub origin: ReactionOrigin,
}

impl ReactionOutcome {
    pub fn cached(bundle: ReactionBundle) -> Self {
        Self {
            bundle,
            origin: ReactionOrigin::Cache,
        }
    }

    pub fn generated(bundle: ReactionBundle) -> Self {
        Self {
            bundle,
            origin: ReactionOrigin::Generated,
        }
    }

    pub fn fallback() -> Self {
        Self {
            bundle: ReactionBundle::fallback(),
            origin: ReactionOrigin::Fallback,
        }
    }
}

/// A single chat completion call: one system message, one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub json_response: bool,
}

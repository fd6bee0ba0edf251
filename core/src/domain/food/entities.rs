use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// The closed set of foods a player can feed to their organs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FoodType {
    EnergyDrink,
    Mcnuggets,
    Burrito,
    Kombucha,
    ProteinBar,
    KaleSalmonBowl,
}

impl FoodType {
    pub const ALL: [FoodType; 6] = [
        FoodType::EnergyDrink,
        FoodType::Mcnuggets,
        FoodType::Burrito,
        FoodType::Kombucha,
        FoodType::ProteinBar,
        FoodType::KaleSalmonBowl,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            FoodType::EnergyDrink => "energy-drink",
            FoodType::Mcnuggets => "mcnuggets",
            FoodType::Burrito => "burrito",
            FoodType::Kombucha => "kombucha",
            FoodType::ProteinBar => "protein-bar",
            FoodType::KaleSalmonBowl => "kale-salmon-bowl",
        }
    }

    /// Comma separated list of every accepted slug, used in validation messages.
    pub fn accepted_slugs() -> String {
        FoodType::ALL
            .iter()
            .map(FoodType::slug)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FoodType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FoodType::ALL
            .into_iter()
            .find(|food_type| food_type.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown food type '{}'", wanted)))
    }
}

/// A selectable food in the catalog. Static data, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FoodItem {
    pub id: u32,
    pub food_type: FoodType,
    pub name: &'static str,
    pub image: &'static str,
    pub outside_perception: &'static str,
    pub inside_reaction_gif: &'static str,
    pub reaction_label: &'static str,
    /// Negative for harmful food, positive for beneficial food.
    pub damage_score: i32,
    pub prompt_seed: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_type_parse_is_case_insensitive() {
        assert_eq!(
            "Energy-Drink".parse::<FoodType>().unwrap(),
            FoodType::EnergyDrink
        );
        assert_eq!(
            " kale-salmon-bowl ".parse::<FoodType>().unwrap(),
            FoodType::KaleSalmonBowl
        );
    }

    #[test]
    fn test_food_type_parse_rejects_unknown() {
        let err = "pizza".parse::<FoodType>().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidInput("unknown food type 'pizza'".to_string())
        );
    }

    #[test]
    fn test_food_type_serializes_as_slug() {
        let json = serde_json::to_string(&FoodType::ProteinBar).unwrap();
        assert_eq!(json, "\"protein-bar\"");
        for food_type in FoodType::ALL {
            assert_eq!(food_type.to_string(), food_type.slug());
        }
    }
}

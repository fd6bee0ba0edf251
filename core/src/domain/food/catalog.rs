use crate::domain::food::entities::{FoodItem, FoodType};

static FOOD_CATALOG: [FoodItem; 6] = [
    FoodItem {
        id: 1,
        food_type: FoodType::EnergyDrink,
        name: "Energy Drink",
        image: "/images/energy-drink.jpeg",
        outside_perception: "Boosted!",
        inside_reaction_gif: "electrical-panel-explosion.jpeg",
        reaction_label: "Brain: 'Racing.' Liver: 'Mayday!'",
        damage_score: -8,
        prompt_seed: "Write a sarcastic monologue from the liver after the person drank an energy drink. Include caffeine panic, vitamin overdose, and sugar-induced drama.",
    },
    FoodItem {
        id: 2,
        food_type: FoodType::Mcnuggets,
        name: "McNuggets",
        image: "/images/mcnuggets.jpeg",
        outside_perception: "Comfort food",
        inside_reaction_gif: "factory-machine-fails.gif",
        reaction_label: "Gut flora: 'Oil bath incoming!'",
        damage_score: -12,
        prompt_seed: "Create a dialogue between gut bacteria and the pancreas after receiving a delivery of McNuggets. Make it chaotic, greasy, and full of regret.",
    },
    FoodItem {
        id: 3,
        food_type: FoodType::Burrito,
        name: "Gas Station Burrito",
        image: "/images/burrito.jpeg",
        outside_perception: "Cheap & tasty",
        inside_reaction_gif: "fire-hose-out-of-control.gif",
        reaction_label: "Colon: 'Emergency evacuate!'",
        damage_score: -15,
        prompt_seed: "Write an emergency gut broadcast as the burrito arrives. The intestines are staging a protest. Include riot metaphors.",
    },
    FoodItem {
        id: 4,
        food_type: FoodType::Kombucha,
        name: "Kombucha",
        image: "/images/kombucha.jpeg",
        outside_perception: "I'm healthy now",
        inside_reaction_gif: "happy-party.gif",
        reaction_label: "Microbiome: 'A pleasant surprise!'",
        damage_score: 5,
        prompt_seed: "Write a zen meditation from the gut microbiome after receiving kombucha. Gratitude, serenity, and healthy vibes only.",
    },
    FoodItem {
        id: 5,
        food_type: FoodType::ProteinBar,
        name: "Protein Bar",
        image: "/images/protein-bar.jpeg",
        outside_perception: "Fitness fuel",
        inside_reaction_gif: "man-spitting-out-coffee.gif",
        reaction_label: "Liver: 'It's sugar in disguise!'",
        damage_score: -4,
        prompt_seed: "Write a sarcastic liver monologue after receiving a 'healthy' protein bar loaded with fake sweeteners and processed goo. The liver is skeptical.",
    },
    FoodItem {
        id: 6,
        food_type: FoodType::KaleSalmonBowl,
        name: "Kale + Salmon Bowl",
        image: "/images/kale-salmon-bowl.jpeg",
        outside_perception: "Goddess mode",
        inside_reaction_gif: "happy-party.gif",
        reaction_label: "Gut: 'Happy party 🙏'",
        damage_score: 10,
        prompt_seed: "Write a celebration party between liver, gut, and brain after getting a kale and salmon bowl. Full of smug clean-eating energy.",
    },
];

pub fn all() -> &'static [FoodItem] {
    &FOOD_CATALOG
}

pub fn find_by_id(id: u32) -> Option<&'static FoodItem> {
    FOOD_CATALOG.iter().find(|item| item.id == id)
}

/// Case-insensitive match on the display name, ignoring surrounding whitespace.
pub fn find_by_name(name: &str) -> Option<&'static FoodItem> {
    let wanted = name.trim().to_lowercase();
    FOOD_CATALOG
        .iter()
        .find(|item| item.name.to_lowercase() == wanted)
}

/// Every [`FoodType`] has exactly one catalog entry.
pub fn find_by_type(food_type: FoodType) -> &'static FoodItem {
    match food_type {
        FoodType::EnergyDrink => &FOOD_CATALOG[0],
        FoodType::Mcnuggets => &FOOD_CATALOG[1],
        FoodType::Burrito => &FOOD_CATALOG[2],
        FoodType::Kombucha => &FOOD_CATALOG[3],
        FoodType::ProteinBar => &FOOD_CATALOG[4],
        FoodType::KaleSalmonBowl => &FOOD_CATALOG[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_food_type_maps_to_its_own_item() {
        for food_type in FoodType::ALL {
            assert_eq!(find_by_type(food_type).food_type, food_type);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<u32> = all().iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let item = find_by_name("gas station BURRITO").unwrap();
        assert_eq!(item.food_type, FoodType::Burrito);
        assert_eq!(item.damage_score, -15);
        assert!(find_by_name("Deep Fried Butter").is_none());
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find_by_id(4).map(|item| item.name), Some("Kombucha"));
        assert!(find_by_id(42).is_none());
    }
}

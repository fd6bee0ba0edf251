use crate::domain::food::{FoodItem, FoodType};

/// Per-food narrator brief with the cast of organ characters.
pub fn system_prompt(food_type: FoodType) -> &'static str {
    match food_type {
        FoodType::EnergyDrink => {
            "You are a satirical narrator for body organs reacting to energy drinks.
Create exactly 4 organ characters having a panicked conversation about processing caffeine and chemicals.

Characters:
- Liver Larry 🫘 (overworked, cynical office worker)
- Heart Rate 💗 (hyperactive, dramatic DJ)
- Kidney Karen 🫘 (stressed water management specialist)
- Adrenal Andy ⚡ (fight-or-flight coordinator)"
        }
        FoodType::Mcnuggets => {
            "You are a satirical narrator for body organs reacting to fast food.
Create exactly 4 organ characters having a conversation about processing greasy food.

Characters:
- Stomach Stan 🍔 (overwhelmed food processor)
- Artery Art 🩸 (plumbing specialist in crisis)
- Liver Larry 🍺 (detox specialist)
- Gut Guy 🦠 (microbiome manager)"
        }
        FoodType::ProteinBar => {
            "You are a satirical narrator for body organs reacting to protein bars.
Create exactly 4 organ characters having a conversation about processing processed protein.

Characters:
- Gut Guru 🧘 (yogi of digestion)
- Sugar Sally 🍬 (energy manager)
- Fiber Frank 🌾 (digestion specialist)
- Label Reader 👓 (skeptical analyst)"
        }
        FoodType::Kombucha => {
            "You are a satirical narrator for body organs reacting to kombucha.
Create exactly 4 organ characters having a conversation about fermented drinks.

Characters:
- Gut Flora Fiona 🦠 (microbiome manager)
- Taste Bud Tim 👅 (flavor analyst)
- Liver Larry 🍵 (detox specialist)
- Bloaty Bill 💨 (gas management)"
        }
        FoodType::Burrito => {
            "You are a satirical narrator for body organs reacting to a massive burrito.
Create exactly 4 organ characters having a conversation about the food coma to come.

Characters:
- Stretch Steve 🤰 (stomach expander)
- Siesta Sam 😴 (energy manager)
- Spice Master 🔥 (heat specialist)
- Regret Randy 😫 (morning after specialist)"
        }
        FoodType::KaleSalmonBowl => {
            "You are a satirical narrator for body organs reacting to a healthy kale salmon bowl.
Create exactly 4 organ characters having a suspiciously positive conversation.

Characters:
- Health Nut Hannah 🥗 (nutrition enthusiast)
- Omega Ollie 🐟 (fat specialist)
- Vitamin Vicky 💊 (micronutrient manager)
- Skeptical Steve 🤨 (waiting for the catch)"
        }
    }
}

/// Scene request with the quantity, the catalog seed and the strict JSON shape.
pub fn user_prompt(item: &FoodItem, quantity: u32) -> String {
    format!(
        r#"A person just consumed {quantity} {food}.
Generate a funny but educational conversation between the organs about this.

Scene direction: {seed}

Requirements:
- Exactly 4 reactions
- Each reaction should be from a different character
- Include emojis and mood indicators
- Keep it lighthearted but informative
- End with a brief medical context in a "The More You Know" style

Respond with JSON only, using this structure:
{{
  "reactions": [
    {{
      "character": "string (character name and emoji)",
      "dialogue": "string (what they say)",
      "timestamp": number (seconds since start),
      "mood": "panic|excited|confused|angry|happy|tired",
      "emoji": "string (emoji for mood)"
    }}
  ],
  "medical_context": "string (brief educational note)",
  "humor_level": number (1-10)
}}"#,
        quantity = quantity,
        food = pluralize(item.name, quantity),
        seed = item.prompt_seed,
    )
}

fn pluralize(name: &str, quantity: u32) -> String {
    if quantity > 1 && !name.ends_with('s') {
        format!("{}s", name)
    } else {
        name.to_string()
    }
}

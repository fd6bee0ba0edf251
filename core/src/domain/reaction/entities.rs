use std::{fmt, time::Duration};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, food::FoodType};

pub const MIN_HUMOR_LEVEL: u8 = 1;
pub const MAX_HUMOR_LEVEL: u8 = 10;
const DEFAULT_HUMOR_LEVEL: u8 = 5;
const FALLBACK_CHARACTER: &str = "System Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Panic,
    Excited,
    Confused,
    Angry,
    Happy,
    Tired,
    #[default]
    Unknown,
}

impl Mood {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "panic" => Mood::Panic,
            "excited" => Mood::Excited,
            "confused" => Mood::Confused,
            "angry" => Mood::Angry,
            "happy" => Mood::Happy,
            "tired" => Mood::Tired,
            _ => Mood::Unknown,
        }
    }
}

// Unknown labels become `Unknown` rather than failing the bundle.
impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Mood::from_label(&label))
    }
}

/// One line of dialogue from an organ character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrganReaction {
    pub character: String,
    pub dialogue: String,
    /// Seconds since the start of the scene. Advisory only.
    #[serde(default)]
    pub timestamp: f64,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub emoji: String,
}

/// The unit that is cached and returned for one food/quantity pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReactionBundle {
    pub reactions: Vec<OrganReaction>,
    pub medical_context: String,
    pub humor_level: u8,
}

#[derive(Debug, Deserialize)]
struct RawReactionBundle {
    reactions: Option<serde_json::Value>,
    #[serde(default)]
    medical_context: Option<String>,
    #[serde(default)]
    humor_level: Option<f64>,
}

impl ReactionBundle {
    /// Content returned whenever generation is impossible.
    pub fn fallback() -> Self {
        Self {
            reactions: vec![OrganReaction {
                character: FALLBACK_CHARACTER.to_string(),
                dialogue: "My circuits are buzzing with concern for your digestive tract. The organs are on a coffee break, try again in a moment.".to_string(),
                timestamp: 0.0,
                mood: Mood::Confused,
                emoji: "🤖".to_string(),
            }],
            medical_context: "Every meal is processed by a whole team of organs: the stomach breaks it down, the liver filters it and the gut absorbs what it can. Check back later for the full story.".to_string(),
            humor_level: MIN_HUMOR_LEVEL,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.reactions.len() == 1 && self.reactions[0].character == FALLBACK_CHARACTER
    }

    /// Parse the raw text of an LLM completion.
    ///
    /// Empty text, non-JSON text, a missing or non-array `reactions` field and an empty
    /// reaction list are all rejected. The humor level is clamped into 1-10.
    pub fn parse_completion(content: &str) -> Result<Self, CoreError> {
        let content = strip_code_fence(content.trim());
        if content.is_empty() {
            return Err(CoreError::InvalidLlmResponse("empty completion".to_string()));
        }

        let raw: RawReactionBundle = serde_json::from_str(content)
            .map_err(|e| CoreError::InvalidLlmResponse(format!("completion is not JSON: {}", e)))?;

        let reactions = match raw.reactions {
            Some(value @ serde_json::Value::Array(_)) => {
                serde_json::from_value::<Vec<OrganReaction>>(value).map_err(|e| {
                    CoreError::InvalidLlmResponse(format!("invalid reactions format: {}", e))
                })?
            }
            Some(_) => {
                return Err(CoreError::InvalidLlmResponse(
                    "reactions field is not a sequence".to_string(),
                ));
            }
            None => {
                return Err(CoreError::InvalidLlmResponse(
                    "no reactions field in response".to_string(),
                ));
            }
        };

        if reactions.is_empty() {
            return Err(CoreError::InvalidLlmResponse(
                "reactions list is empty".to_string(),
            ));
        }

        let humor_level = raw
            .humor_level
            .filter(|level| level.is_finite())
            .map(|level| {
                level
                    .round()
                    .clamp(MIN_HUMOR_LEVEL as f64, MAX_HUMOR_LEVEL as f64) as u8
            })
            .unwrap_or(DEFAULT_HUMOR_LEVEL);

        Ok(Self {
            reactions,
            medical_context: raw.medical_context.unwrap_or_default(),
            humor_level,
        })
    }
}

fn strip_code_fence(content: &str) -> &str {
    let Some(inner) = content.strip_prefix("```") else {
        return content;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Cache key: `"{food_type}_{quantity}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(food_type: FoodType, quantity: u32) -> Self {
        Self(format!("{}_{}", food_type.slug(), quantity))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CacheKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub key: CacheKey,
    pub bundle: ReactionBundle,
    pub created_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(key: CacheKey, bundle: ReactionBundle, created_at: DateTime<Utc>) -> Self {
        Self {
            key,
            bundle,
            created_at,
        }
    }

    /// Staleness is judged at read time; the store never expires rows on its own.
    ///
    /// A `created_at` ahead of `now` (clock skew between writers) is measured the
    /// same way, so a row stamped more than one TTL in the future is stale.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        (now - self.created_at)
            .abs()
            .to_std()
            .is_ok_and(|age| age < ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    const VALID_COMPLETION: &str = r#"{
        "reactions": [
            {"character": "Liver Larry 🫘", "dialogue": "Not again.", "timestamp": 0, "mood": "angry", "emoji": "😤"},
            {"character": "Heart Rate 💗", "dialogue": "BPM to the moon!", "timestamp": 2.5, "mood": "excited", "emoji": "🚀"}
        ],
        "medical_context": "Caffeine raises heart rate.",
        "humor_level": 8
    }"#;

    #[test]
    fn test_parse_completion_valid() {
        let bundle = ReactionBundle::parse_completion(VALID_COMPLETION).unwrap();
        assert_eq!(bundle.reactions.len(), 2);
        assert_eq!(bundle.reactions[0].mood, Mood::Angry);
        assert_eq!(bundle.reactions[1].timestamp, 2.5);
        assert_eq!(bundle.humor_level, 8);
        assert!(!bundle.is_fallback());
    }

    #[test]
    fn test_parse_completion_accepts_code_fence() {
        let fenced = format!("```json\n{}\n```", VALID_COMPLETION);
        let bundle = ReactionBundle::parse_completion(&fenced).unwrap();
        assert_eq!(bundle.reactions.len(), 2);
    }

    #[test]
    fn test_parse_completion_rejects_empty_and_non_json() {
        assert!(matches!(
            ReactionBundle::parse_completion("   "),
            Err(CoreError::InvalidLlmResponse(_))
        ));
        assert!(matches!(
            ReactionBundle::parse_completion("The liver says hi"),
            Err(CoreError::InvalidLlmResponse(_))
        ));
    }

    #[test]
    fn test_parse_completion_rejects_missing_or_scalar_reactions() {
        let missing = r#"{"medical_context": "x", "humor_level": 3}"#;
        let scalar = r#"{"reactions": "nope", "medical_context": "x", "humor_level": 3}"#;
        let empty = r#"{"reactions": [], "medical_context": "x", "humor_level": 3}"#;

        for content in [missing, scalar, empty] {
            assert!(
                matches!(
                    ReactionBundle::parse_completion(content),
                    Err(CoreError::InvalidLlmResponse(_))
                ),
                "{content} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_completion_clamps_humor_level_and_keeps_unknown_moods() {
        let content = r#"{
            "reactions": [{"character": "Gut Guy 🦠", "dialogue": "zzz", "mood": "sleepy"}],
            "humor_level": 42
        }"#;
        let bundle = ReactionBundle::parse_completion(content).unwrap();
        assert_eq!(bundle.humor_level, MAX_HUMOR_LEVEL);
        assert_eq!(bundle.reactions[0].mood, Mood::Unknown);
        assert_eq!(bundle.medical_context, "");

        let low = r#"{"reactions": [{"character": "a", "dialogue": "b"}], "humor_level": -3}"#;
        assert_eq!(
            ReactionBundle::parse_completion(low).unwrap().humor_level,
            MIN_HUMOR_LEVEL
        );
    }

    #[test]
    fn test_fallback_bundle_shape() {
        let bundle = ReactionBundle::fallback();
        assert!(bundle.is_fallback());
        assert_eq!(bundle.reactions[0].character, "System Error");
        assert_eq!(bundle.reactions[0].mood, Mood::Confused);
        assert_eq!(bundle.humor_level, MIN_HUMOR_LEVEL);
    }

    #[test]
    fn test_cache_key_format() {
        assert_eq!(CacheKey::new(FoodType::Kombucha, 1).as_str(), "kombucha_1");
        assert_eq!(
            CacheKey::new(FoodType::KaleSalmonBowl, 3).to_string(),
            "kale-salmon-bowl_3"
        );
    }

    #[test]
    fn test_cache_entry_freshness() {
        let created_at = Utc::now();
        let entry = CacheEntry::new(
            CacheKey::new(FoodType::Burrito, 2),
            ReactionBundle::fallback(),
            created_at,
        );
        let ttl = Duration::from_secs(3600);

        assert!(entry.is_fresh(created_at + TimeDelta::seconds(3599), ttl));
        assert!(!entry.is_fresh(created_at + TimeDelta::seconds(3600), ttl));
        assert!(entry.is_fresh(created_at - TimeDelta::seconds(10), ttl));
    }

    #[test]
    fn test_cache_entry_from_the_far_future_is_stale() {
        let now = Utc::now();
        let entry = CacheEntry::new(
            CacheKey::new(FoodType::Burrito, 1),
            ReactionBundle::fallback(),
            now + TimeDelta::days(2),
        );

        assert!(!entry.is_fresh(now, Duration::from_secs(3600)));
    }
}

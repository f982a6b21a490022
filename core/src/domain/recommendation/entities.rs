use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, weather::entities::WeatherSnapshot};

/// Meal bucket derived from the hour of day. The ranges are fixed and
/// non-overlapping: [5,11) breakfast, [11,15) lunch, [15,21) dinner,
/// everything else late-night snack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    LateNightSnack,
}

impl MealCategory {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=10 => Self::Breakfast,
            11..=14 => Self::Lunch,
            15..=20 => Self::Dinner,
            _ => Self::LateNightSnack,
        }
    }
}

impl std::fmt::Display for MealCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::LateNightSnack => "late night snack",
        };
        f.write_str(label)
    }
}

/// Wall-clock time of the request and the meal bucket it falls into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeContext {
    /// "HH:MM" as supplied by the caller.
    pub time: String,
    pub meal_category: MealCategory,
}

impl TimeContext {
    /// Classifies an "HH:MM" string by its hour component only. Hours
    /// outside 0..=23 are not range-checked and land in the late-night
    /// bucket; only a non-integer hour is an error.
    pub fn from_hhmm(time: &str) -> Result<Self, CoreError> {
        let hour_part = time.split(':').next().unwrap_or(time);
        let hour: u32 = hour_part
            .trim()
            .parse()
            .map_err(|_| CoreError::TimeParse(format!("expected \"HH:MM\", got {time:?}")))?;

        Ok(Self {
            time: time.to_string(),
            meal_category: MealCategory::from_hour(hour),
        })
    }
}

/// One suggested dish, as produced by the synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationItem {
    /// Ordinal identifier, typically "1".."3".
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Everything the pipeline accumulated while producing a result. Stages add
/// named fields here instead of merging loose key/value maps, so each
/// stage's inputs are statically declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationContext {
    pub weather: WeatherSnapshot,
    pub time: TimeContext,
    pub mood: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_restrictions: Vec<String>,
}

/// The sole output artifact of the pipeline. Nothing is stored across
/// requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResult {
    pub recommendations: Vec<RecommendationItem>,
    /// Parse-failure reason when the model output could not be decoded and
    /// the fixed single-item fallback was substituted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degraded: Option<String>,
    pub context: RecommendationContext,
}

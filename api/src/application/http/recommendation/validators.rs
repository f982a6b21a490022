use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GetRecommendationsRequest {
    /// Latitude of the user's location.
    #[schema(example = 40.7128)]
    pub latitude: f64,

    /// Longitude of the user's location.
    #[schema(example = -74.0060)]
    pub longitude: f64,

    /// Free-text mood, e.g. "happy" or "bored".
    #[validate(length(
        min = 1,
        max = 100,
        message = "mood must be between 1 and 100 characters"
    ))]
    pub mood: String,

    /// Dietary restrictions threaded into the recommendation prompt.
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

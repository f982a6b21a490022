#[derive(Debug, Clone)]
pub struct GetRecommendationsInput {
    pub latitude: f64,
    pub longitude: f64,
    /// Free-text mood, e.g. "happy" or "bored". Not validated against an
    /// enum.
    pub mood: String,
    /// Wall-clock "HH:MM" supplied by the caller; the pipeline never
    /// re-derives it.
    pub current_time: String,
    pub dietary_restrictions: Vec<String>,
}

use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::RecommendationResult, value_objects::GetRecommendationsInput},
};

/// Outbound port for the text-generation model.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    /// Single-turn completion. The returned string is expected to already
    /// be the JSON the prompt demands; the provider enforces no schema, so
    /// shape is checked on our side after the fact.
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Inbound port for the recommendation pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    fn get_recommendations(
        &self,
        input: GetRecommendationsInput,
    ) -> impl Future<Output = Result<RecommendationResult, CoreError>> + Send;
}

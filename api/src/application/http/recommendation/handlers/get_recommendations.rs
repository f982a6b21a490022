use axum::extract::State;
use chrono::Local;
use forkcast_core::domain::recommendation::{
    entities::RecommendationResult, ports::RecommendationService,
    value_objects::GetRecommendationsInput,
};

use crate::application::http::{
    recommendation::validators::GetRecommendationsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/recommendations",
    tag = "recommendations",
    summary = "Get food recommendations",
    description = "Chains a weather lookup, a time-of-day classification and one \
                   text-generation call into three food recommendations",
    request_body = GetRecommendationsRequest,
    responses(
        (status = 200, body = RecommendationResult),
        (status = 400, description = "Malformed or invalid request body"),
        (status = 500, description = "Weather provider or model call failed"),
    )
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GetRecommendationsRequest>,
) -> Result<Response<RecommendationResult>, ApiError> {
    // The pipeline expects the caller to supply the wall-clock time.
    let current_time = Local::now().format("%H:%M").to_string();

    let result = state
        .service
        .get_recommendations(GetRecommendationsInput {
            latitude: payload.latitude,
            longitude: payload.longitude,
            mood: payload.mood,
            current_time,
            dietary_restrictions: payload.dietary_restrictions,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forkcast API",
        description = "Weather- and mood-aware food recommendations"
    ),
    paths(
        crate::application::http::recommendation::handlers::get_recommendations::get_recommendations,
        crate::application::http::health::health,
    )
)]
pub struct ApiDoc;

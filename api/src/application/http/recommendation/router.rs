use axum::{routing::post, Router};

use super::handlers::get_recommendations::get_recommendations;
use crate::application::http::server::app_state::AppState;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/recommendations", state.args.server.root_path),
        post(get_recommendations),
    )
}

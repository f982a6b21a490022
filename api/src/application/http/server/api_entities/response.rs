use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Typed success responses returned by handlers.
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
        }
    }
}

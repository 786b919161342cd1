use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Lookup miss; the payload is the requested product id.
    #[error("{0} not found")]
    ProductNotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ProductNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("{id} not found")).into_response()
            }
        }
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorBody;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid {key} value: {reason}")]
    Config { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::EmptyQuery => StatusCode::BAD_REQUEST,
            AppError::MalformedPayload { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config { .. } | AppError::Io { .. } => {
                error!("{self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

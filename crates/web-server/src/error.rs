use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A repository call failed at the store layer. The fixed message is
    /// what the client sees; the underlying `DbError` rides along as the
    /// cause and is only logged.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: database::DbError,
    },
    /// The request carried an identifier that could not be parsed;
    /// rejected before any store call is issued.
    #[error("{0}")]
    InvalidId(String),
    /// The request body could not be parsed into the expected shape;
    /// rejected before any store call is issued.
    #[error("{0}")]
    InvalidPayload(String),
}

impl AppError {
    pub fn store(message: &'static str, source: database::DbError) -> Self {
        Self::Store { message, source }
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Store { message, source } => {
                tracing::error!(error = ?source, "{}.", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::InvalidId(message) | AppError::InvalidPayload(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
        };

        let body = Json(json!({ "message": error_message }));
        (status, body).into_response()
    }
}

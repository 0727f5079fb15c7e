use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Request-level failures. The display strings double as the wire messages,
/// except for `Database`, which is logged and replaced with a generic body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Could not find user with that ID")]
    UserNotFound,
    #[error("Cannot update a user that does not exist")]
    UpdateTargetMissing,
    #[error("Cannot delete a user that does not exist")]
    DeleteTargetMissing,
    #[error("User ID already taken")]
    IdAlreadyTaken,
    #[error("{0}")]
    BadRequest(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::UserNotFound | AppError::UpdateTargetMissing | AppError::DeleteTargetMissing => {
                tracing::debug!("User not found");
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::IdAlreadyTaken => {
                tracing::debug!("User id already taken");
                (StatusCode::CONFLICT, self.to_string())
            }
            AppError::BadRequest(msg) => {
                tracing::debug!(message = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

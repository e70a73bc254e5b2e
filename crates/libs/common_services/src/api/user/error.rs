use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("No users available")]
    NoUsers,

    /// Submitted email or nick already belongs to a different user.
    #[error("Email or nick already in use")]
    DuplicateData,

    /// The update payload contained no updatable field.
    #[error("Nothing to update")]
    EmptyUpdate,

    /// The multipart request did not include a file part.
    #[error("Request does not include a file")]
    MissingFile,

    #[error("Unsupported image type")]
    UnsupportedFileType,

    /// The avatar could not be written or the user row vanished mid-update.
    #[error("Failed to store the uploaded file")]
    UploadFailed,

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Self::NoUsers => (StatusCode::NOT_FOUND, self.to_string()),
            Self::DuplicateData => (StatusCode::CONFLICT, self.to_string()),
            Self::EmptyUpdate => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::MissingFile => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::UnsupportedFileType => (StatusCode::UNSUPPORTED_MEDIA_TYPE, self.to_string()),
            Self::UploadFailed => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            Self::Db(e) => {
                error!("Database error in user endpoint: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            Self::Internal(e) => {
                error!("Internal error in user endpoint: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "status": "error", "message": message }));
        (status, body).into_response()
    }
}

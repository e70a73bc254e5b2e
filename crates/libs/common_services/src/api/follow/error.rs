use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum FollowError {
    #[error("Cannot follow yourself")]
    SelfFollow,

    #[error("User not found")]
    UserNotFound,

    /// The edge already exists; one follow per ordered pair.
    #[error("Already following this user")]
    AlreadyFollowing,

    #[error("Follow relation not found")]
    NotFollowing,

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

impl IntoResponse for FollowError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::SelfFollow => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::UserNotFound | Self::NotFollowing => (StatusCode::NOT_FOUND, self.to_string()),
            Self::AlreadyFollowing => (StatusCode::CONFLICT, self.to_string()),
            Self::Db(e) => {
                error!("Database error in follow endpoint: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            Self::Internal(e) => {
                error!("Internal error in follow endpoint: {e:?}");
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

use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum PublicationError {
    #[error("Missing publication text")]
    MissingText,

    #[error("Publication not found")]
    NotFound,

    /// Only the owner may delete a publication.
    #[error("Permission denied")]
    NotOwner,

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

impl IntoResponse for PublicationError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingText => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Self::NotOwner => (StatusCode::FORBIDDEN, self.to_string()),
            Self::Db(e) => {
                error!("Database error in publication endpoint: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            Self::Internal(e) => {
                error!("Internal error in publication endpoint: {e:?}");
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

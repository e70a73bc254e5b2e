use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use tracing::{info, warn};

#[derive(Debug)]
pub enum AuthError {
    /// A required registration/login field is missing or empty.
    MissingFields,
    /// A user with the same case-folded email or nick already exists.
    UserAlreadyExists,
    /// No user with the given email.
    UserNotFound,
    /// Password did not match the stored hash.
    InvalidPassword,
    MissingToken,
    InvalidToken,
    Internal(eyre::Report),
}

fn log_auth_failure(error: &AuthError) {
    match error {
        AuthError::MissingFields => info!("Request rejected: required fields missing."),
        AuthError::UserAlreadyExists => info!("Registration failed: user already exists."),
        AuthError::UserNotFound => info!("Login failed: no user with that email."),
        // Info to reduce noise; wrong passwords are routine.
        AuthError::InvalidPassword => info!("Login failed: invalid password."),
        AuthError::MissingToken => warn!("Authentication failed: missing Authorization token."),
        AuthError::InvalidToken => warn!("Authentication failed: invalid token provided."),
        AuthError::Internal(e) => {
            tracing::error!("Internal server error during authentication: {:?}", e);
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        log_auth_failure(&self);

        let (status, message) = match self {
            Self::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            Self::UserAlreadyExists => (StatusCode::CONFLICT, "User already exists"),
            Self::UserNotFound => (StatusCode::NOT_FOUND, "User not found"),
            Self::InvalidPassword => (StatusCode::UNAUTHORIZED, "Invalid password"),
            Self::MissingToken | Self::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "Authentication failed")
            }
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred",
            ),
        };

        let body = Json(json!({ "status": "error", "message": message }));
        (status, body).into_response()
    }
}

// Lets `?` convert `sqlx`/`bcrypt`/`jsonwebtoken` errors into `Internal`.
impl<E> From<E> for AuthError
where
    E: Into<eyre::Report>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

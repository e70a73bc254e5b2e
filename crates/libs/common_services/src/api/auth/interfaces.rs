use crate::database::app_user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration payload. Fields are optional at the wire level so a missing
/// field maps to the contract's 400 rather than a deserialization rejection;
/// the service validates presence.
#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterUser {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[schema(value_type = String, format = "password", example = "my-secret-password")]
    pub password: Option<String>,
    pub nick: Option<String>,
}

/// Login payload, validated the same way as [`RegisterUser`].
#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginUser {
    pub email: Option<String>,
    #[schema(value_type = String, format = "password", example = "my-secret-password")]
    pub password: Option<String>,
}

/// Registration fields after presence validation and case-folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub nick: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct RegisterResponse {
    pub status: String,
    pub message: String,
    pub user: User,
}

/// User projection returned on login.
#[derive(Serialize, Debug, ToSchema)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub nick: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct LoginResponse {
    pub status: String,
    pub message: String,
    pub token: String,
    pub user: AuthenticatedUser,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

/// Represents a user record to be safely sent to clients.
/// Note the absence of the `password` field.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub nick: String,
    pub image: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Full user record from the database, including the password hash.
/// Only the credential subsystem ever sees this.
#[derive(Debug, FromRow)]
pub struct UserWithPassword {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub nick: String,
    pub image: Option<String>,
    pub role: UserRole,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Projection exposed on profile and listing endpoints: no password, no
/// role, no email.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
pub struct PublicUser {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub nick: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Name fields only, used by the counters endpoint.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
pub struct UserName {
    pub name: String,
    pub last_name: String,
}

/// Maps to the `user_role` Postgres enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    RoleUser,
    RoleAdmin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoleUser => write!(f, "role_user"),
            Self::RoleAdmin => write!(f, "role_admin"),
        }
    }
}

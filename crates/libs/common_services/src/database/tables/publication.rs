use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A publication owned by a user.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
pub struct Publication {
    pub id: i32,
    pub user_id: i32,
    pub text: String,
    pub file: Option<String>,
    pub created_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Directed follow edge: `following_user` follows `followed_user`.
/// One edge per ordered pair, enforced by a unique constraint.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
pub struct Follow {
    pub id: i32,
    pub following_user: i32,
    pub followed_user: i32,
    pub created_at: DateTime<Utc>,
}

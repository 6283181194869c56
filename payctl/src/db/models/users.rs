//! User account records (read side only; account lifecycle is owned elsewhere).

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::types::UserId;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UserDBResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

//! IP whitelist records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::types::UserId;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct WhitelistedIpDBResponse {
    pub id: i64,
    pub ip_address: String,
    pub user_id: Option<UserId>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

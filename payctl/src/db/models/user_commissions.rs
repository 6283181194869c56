//! Per-user commission override records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::types::{CommissionCategory, CommissionId, UserId};

/// A stored override row. `commission_type` is the snake_case category
/// identifier and `commission_id` points into that category's catalog table.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UserCommissionDBResponse {
    pub id: i64,
    pub user_id: UserId,
    pub commission_type: String,
    pub commission_id: CommissionId,
    #[schema(value_type = f64)]
    pub user_commission: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Upsert request for an override, keyed by the
/// (user_id, commission_type, commission_id) triple.
#[derive(Debug, Clone)]
pub struct UserCommissionUpsertDBRequest {
    pub user_id: UserId,
    pub commission_type: CommissionCategory,
    pub commission_id: CommissionId,
    pub user_commission: Decimal,
}

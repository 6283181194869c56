//! Append-only API call log records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::types::{ApiLogId, UserId};

/// A raw log row as stored. Most display fields are nullable; the API layer
/// substitutes "-" for missing values.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ApiLogDBResponse {
    pub id: ApiLogId,
    pub user_id: Option<UserId>,
    pub api_name: Option<String>,
    pub request_id: Option<String>,
    pub reference_id: Option<String>,
    pub request_payload: Option<serde_json::Value>,
    pub response_data: Option<serde_json::Value>,
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub ip_address: Option<String>,
    pub execution_time: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

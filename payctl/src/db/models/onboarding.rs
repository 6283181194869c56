//! Merchant onboarding request records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// An onboarding submission. The document fields hold storage paths to the
/// uploaded KYC images; `status` tracks admin approval.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OnboardRequestDBResponse {
    pub id: i64,
    pub full_name: String,
    pub merchantcode: String,
    pub mobile: String,
    pub email: String,
    pub firm: String,
    pub aadhaar_front: Option<String>,
    pub aadhaar_back: Option<String>,
    pub pan_card: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

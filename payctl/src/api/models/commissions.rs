//! Request/response shapes for commission management.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::models::users::UserSummary;
use crate::db::models::commissions::DefaultCommissions;
use crate::db::models::user_commissions::UserCommissionDBResponse;
use crate::types::CommissionId;

/// One row of a default-commission batch edit. Only the platform margin is
/// editable; the provider default never changes through this path.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CommissionRateEdit {
    pub id: CommissionId,
    #[schema(value_type = f64)]
    pub our_commission: Decimal,
}

/// One row of a user override batch edit. `commission_type` arrives as a raw
/// string so an unknown category can be rejected with a validation error
/// instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserCommissionEdit {
    pub commission_type: String,
    pub commission_id: CommissionId,
    #[schema(value_type = f64)]
    pub user_commission: Decimal,
}

/// A stored override as presented to the admin screen.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserCommissionItem {
    pub id: i64,
    pub commission_type: String,
    pub commission_id: CommissionId,
    #[schema(value_type = f64)]
    pub user_commission: Decimal,
}

impl From<UserCommissionDBResponse> for UserCommissionItem {
    fn from(row: UserCommissionDBResponse) -> Self {
        Self {
            id: row.id,
            commission_type: row.commission_type,
            commission_id: row.commission_id,
            user_commission: row.user_commission,
        }
    }
}

/// Combined payload for the per-user commission screen: the user's overrides
/// and the full default catalog, side by side. Merging overrides onto
/// defaults is left to the caller.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserCommissionsData {
    pub user_commissions: Vec<UserCommissionItem>,
    pub default_commissions: DefaultCommissions,
    pub user: UserSummary,
}

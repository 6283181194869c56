//! Request/response shapes for service permission management.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::models::users::{UserOption, UserSummary};
use crate::db::models::services::ServiceWithAccess;
use crate::types::ServiceId;

/// One catalog entry with the selected user's access flag.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PermissionEntry {
    pub service_id: ServiceId,
    pub service_name: String,
    pub category_name: Option<String>,
    pub description: Option<String>,
    pub has_access: bool,
}

impl From<ServiceWithAccess> for PermissionEntry {
    fn from(row: ServiceWithAccess) -> Self {
        Self {
            service_id: row.service_id,
            service_name: row.service_name,
            category_name: row.category_name,
            description: row.description,
            has_access: row.has_access,
        }
    }
}

/// The permission screen payload: the user plus the complete catalog.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserPermissionsResponse {
    pub user: UserSummary,
    pub permissions: Vec<PermissionEntry>,
}

/// One desired access state in a batch update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PermissionEdit {
    pub service_id: ServiceId,
    pub has_access: bool,
}

/// Batch permission update. Services not listed are left untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePermissionsRequest {
    pub permissions: Vec<PermissionEdit>,
}

/// Active users for the permission screen dropdown.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<UserOption>,
}

//! User shapes exposed by the admin API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::db::models::users::UserDBResponse;
use crate::types::UserId;

/// Minimal user identity, embedded in commission and permission responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<UserDBResponse> for UserSummary {
    fn from(user: UserDBResponse) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Dropdown entry for the permission screen; carries the role so the admin
/// UI can distinguish admin accounts.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserOption {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<UserDBResponse> for UserOption {
    fn from(user: UserDBResponse) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

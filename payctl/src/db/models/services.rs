//! Service catalog and per-user access records.

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::types::{CategoryId, ServiceId};

/// A catalog entry joined against one user's grant set. The catalog is
/// complete regardless of grants; `has_access` carries the membership flag.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ServiceWithAccess {
    pub service_id: ServiceId,
    pub service_name: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub category_name: Option<String>,
    pub has_access: bool,
}

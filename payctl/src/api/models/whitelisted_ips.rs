//! Request/response shapes for the IP whitelist.

use serde::Serialize;
use utoipa::ToSchema;

use crate::db::models::whitelisted_ips::WhitelistedIpDBResponse;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WhitelistedIpsResponse {
    pub whitelisted_ips: Vec<WhitelistedIpDBResponse>,
}

/// Acknowledgement carrying the status after the toggle.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ToggleStatusResponse {
    pub message: String,
    pub status: bool,
}

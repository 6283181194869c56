//! Handlers for the IP whitelist.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::AppState;
use crate::api::models::whitelisted_ips::{ToggleStatusResponse, WhitelistedIpsResponse};
use crate::db::handlers::WhitelistedIps;
use crate::errors::{Error, Result};

#[utoipa::path(
    get,
    path = "/admin/whitelisted-ips",
    tag = "whitelisted-ips",
    summary = "List all whitelisted IPs",
    responses(
        (status = 200, description = "All whitelist entries", body = WhitelistedIpsResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_whitelisted_ips(State(state): State<AppState>) -> Result<Json<WhitelistedIpsResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = WhitelistedIps::new(&mut conn);

    let whitelisted_ips = repo.list().await?;

    Ok(Json(WhitelistedIpsResponse { whitelisted_ips }))
}

#[utoipa::path(
    patch,
    path = "/admin/whitelisted-ips/{id}/toggle-status",
    tag = "whitelisted-ips",
    summary = "Toggle a whitelist entry between active and inactive",
    params(
        ("id" = i64, Path, description = "Whitelist entry identifier"),
    ),
    responses(
        (status = 200, description = "Status toggled", body = ToggleStatusResponse),
        (status = 404, description = "Entry not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(id = id))]
pub async fn toggle_ip_status(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<ToggleStatusResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = WhitelistedIps::new(&mut conn);

    let entry = repo
        .toggle_status(id)
        .await?
        .ok_or_else(|| Error::not_found("Whitelisted IP", id))?;

    Ok(Json(ToggleStatusResponse {
        message: "Status updated successfully".to_string(),
        status: entry.status,
    }))
}

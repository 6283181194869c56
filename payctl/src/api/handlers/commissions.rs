//! Handlers for commission management: the default catalog and per-user
//! overrides.
//!
//! Batch updates validate the whole payload before any write. The writes
//! themselves are applied row by row without a transaction, matching the
//! established dashboard behavior: a mid-batch failure leaves earlier rows
//! applied. The permission endpoints are the transactional counterpart.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;

use crate::AppState;
use crate::api::models::commissions::{CommissionRateEdit, UserCommissionEdit, UserCommissionItem, UserCommissionsData};
use crate::api::models::common::MessageResponse;
use crate::api::models::users::UserSummary;
use crate::db::handlers::{Commissions, UserCommissions, Users};
use crate::db::models::commissions::DefaultCommissions;
use crate::db::models::user_commissions::UserCommissionUpsertDBRequest;
use crate::errors::{Error, Result};
use crate::types::{CommissionCategory, UserId};

#[utoipa::path(
    get,
    path = "/admin/commissions/data",
    tag = "commissions",
    summary = "Fetch all default commissions",
    responses(
        (status = 200, description = "All ten commission catalogs", body = DefaultCommissions),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_default_commissions(State(state): State<AppState>) -> Result<Json<DefaultCommissions>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Commissions::new(&mut conn);

    let commissions = repo.load_all().await?;

    Ok(Json(commissions))
}

#[utoipa::path(
    put,
    path = "/admin/commissions/{type}",
    tag = "commissions",
    summary = "Batch-update default commission margins for one category",
    params(
        ("type" = String, Path, description = "Commission category identifier (e.g. recharge, electricity)"),
    ),
    request_body = Vec<CommissionRateEdit>,
    responses(
        (status = 200, description = "Margins updated", body = MessageResponse),
        (status = 422, description = "Unknown category or invalid rate"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(commission_type = %commission_type, edits = edits.len()))]
pub async fn update_commissions(
    State(state): State<AppState>,
    Path(commission_type): Path<String>,
    Json(edits): Json<Vec<CommissionRateEdit>>,
) -> Result<Json<MessageResponse>> {
    let category: CommissionCategory = commission_type
        .parse()
        .map_err(|_| Error::validation("Invalid commission type"))?;

    // Whole-batch validation before the first write
    for edit in &edits {
        if edit.our_commission < Decimal::ZERO {
            return Err(Error::validation("our_commission must be a non-negative number"));
        }
    }

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Commissions::new(&mut conn);

    for edit in &edits {
        // An id with no catalog row is a no-op, not an error
        repo.update_rate(category, edit.id, edit.our_commission).await?;
    }

    Ok(Json(MessageResponse::new("Default commissions updated successfully")))
}

#[utoipa::path(
    get,
    path = "/admin/commissions/users",
    tag = "commissions",
    summary = "List users for the commission override dropdown",
    responses(
        (status = 200, description = "All users", body = Vec<UserSummary>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Users::new(&mut conn);

    let users = repo.list().await?;

    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}

#[utoipa::path(
    get,
    path = "/admin/commissions/users/{user_id}/data",
    tag = "commissions",
    summary = "Fetch one user's overrides alongside the default catalog",
    params(
        ("user_id" = i64, Path, description = "User identifier"),
    ),
    responses(
        (status = 200, description = "Overrides, defaults and the user", body = UserCommissionsData),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(user_id = user_id))]
pub async fn get_user_commissions(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserCommissionsData>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let user = Users::new(&mut conn)
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| Error::not_found("User", user_id))?;

    let overrides = UserCommissions::new(&mut conn).list_for_user(user_id).await?;
    let defaults = Commissions::new(&mut conn).load_all().await?;

    Ok(Json(UserCommissionsData {
        user_commissions: overrides.into_iter().map(UserCommissionItem::from).collect(),
        default_commissions: defaults,
        user: UserSummary::from(user),
    }))
}

#[utoipa::path(
    put,
    path = "/admin/commissions/users/{user_id}",
    tag = "commissions",
    summary = "Batch-upsert commission overrides for one user",
    params(
        ("user_id" = i64, Path, description = "User identifier"),
    ),
    request_body = Vec<UserCommissionEdit>,
    responses(
        (status = 200, description = "Overrides applied", body = MessageResponse),
        (status = 404, description = "User not found"),
        (status = 422, description = "Unknown category or invalid rate"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(user_id = user_id, edits = edits.len()))]
pub async fn update_user_commissions(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(edits): Json<Vec<UserCommissionEdit>>,
) -> Result<Json<MessageResponse>> {
    // Whole-batch validation before the first write
    let mut requests = Vec::with_capacity(edits.len());
    for edit in &edits {
        let commission_type: CommissionCategory = edit
            .commission_type
            .parse()
            .map_err(|_| Error::validation(format!("Invalid commission type '{}'", edit.commission_type)))?;

        if edit.user_commission < Decimal::ZERO {
            return Err(Error::validation("user_commission must be a non-negative number"));
        }

        requests.push(UserCommissionUpsertDBRequest {
            user_id,
            commission_type,
            commission_id: edit.commission_id,
            user_commission: edit.user_commission,
        });
    }

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    Users::new(&mut conn)
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| Error::not_found("User", user_id))?;

    let mut repo = UserCommissions::new(&mut conn);
    for request in &requests {
        repo.upsert(request).await?;
    }

    Ok(Json(MessageResponse::new("User commissions updated successfully")))
}

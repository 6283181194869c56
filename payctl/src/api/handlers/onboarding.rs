//! Handlers for merchant onboarding requests.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::AppState;
use crate::api::models::onboarding::{OnboardRequestsResponse, OnboardStatusResponse, UpdateStatusRequest};
use crate::db::handlers::OnboardRequests;
use crate::errors::{Error, Result};

#[utoipa::path(
    get,
    path = "/admin/onboard-requests",
    tag = "onboarding",
    summary = "List all onboarding requests",
    responses(
        (status = 200, description = "All onboarding requests", body = OnboardRequestsResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_onboard_requests(State(state): State<AppState>) -> Result<Json<OnboardRequestsResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = OnboardRequests::new(&mut conn);

    let onboard_requests = repo.list().await?;

    Ok(Json(OnboardRequestsResponse { onboard_requests }))
}

#[utoipa::path(
    post,
    path = "/admin/onboard-requests/{id}/status",
    tag = "onboarding",
    summary = "Approve or reject an onboarding request",
    params(
        ("id" = i64, Path, description = "Onboarding request identifier"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = OnboardStatusResponse),
        (status = 404, description = "Request not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(id = id, status = request.status))]
pub async fn update_onboard_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<OnboardStatusResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = OnboardRequests::new(&mut conn);

    let onboard_request = repo
        .update_status(id, request.status)
        .await?
        .ok_or_else(|| Error::not_found("Onboard request", id))?;

    Ok(Json(OnboardStatusResponse {
        message: "Status updated successfully".to_string(),
        onboard_request,
    }))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{create_test_app, seed_onboard_request};
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn new_requests_start_unapproved(pool: PgPool) {
        seed_onboard_request(&pool, "Suresh Traders").await;
        seed_onboard_request(&pool, "Lakshmi Stores").await;
        let server = create_test_app(pool).await;

        let body: serde_json::Value = server.get("/admin/onboard-requests").await.json();
        let requests = body["onboard_requests"].as_array().unwrap();

        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r["status"] == json!(false)));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn approval_round_trips_through_the_listing(pool: PgPool) {
        let id = seed_onboard_request(&pool, "Suresh Traders").await;
        let server = create_test_app(pool).await;

        let response = server
            .post(&format!("/admin/onboard-requests/{id}/status"))
            .json(&json!({"status": true}))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], json!("Status updated successfully"));
        assert_eq!(body["onboard_request"]["id"], json!(id));
        assert_eq!(body["onboard_request"]["status"], json!(true));

        let body: serde_json::Value = server.get("/admin/onboard-requests").await.json();
        assert_eq!(body["onboard_requests"][0]["status"], json!(true));

        // Rejection flips it back
        server
            .post(&format!("/admin/onboard-requests/{id}/status"))
            .json(&json!({"status": false}))
            .await
            .assert_status_ok();
        let body: serde_json::Value = server.get("/admin/onboard-requests").await.json();
        assert_eq!(body["onboard_requests"][0]["status"], json!(false));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn unknown_request_is_a_404(pool: PgPool) {
        let server = create_test_app(pool).await;

        server
            .post("/admin/onboard-requests/9999/status")
            .json(&json!({"status": true}))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

//! Handlers for per-user service permissions.
//!
//! The batch update is the one write path in this service that is
//! transactional: either every listed grant/revoke lands or none do.

use axum::{
    Json,
    extract::{Path, State},
};
use sqlx::Acquire;

use crate::AppState;
use crate::api::models::common::MessageResponse;
use crate::api::models::permissions::{PermissionEntry, UpdatePermissionsRequest, UserPermissionsResponse, UsersResponse};
use crate::api::models::users::{UserOption, UserSummary};
use crate::db::handlers::{Services, Users};
use crate::errors::{Error, Result};
use crate::types::UserId;

#[utoipa::path(
    get,
    path = "/admin/permissions/users",
    tag = "permissions",
    summary = "List active users for the permission screen",
    responses(
        (status = 200, description = "Active users", body = UsersResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Users::new(&mut conn);

    let users = repo.list_active().await?;

    Ok(Json(UsersResponse {
        users: users.into_iter().map(UserOption::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/admin/permissions/{user_id}",
    tag = "permissions",
    summary = "Fetch the service catalog with one user's access flags",
    params(
        ("user_id" = i64, Path, description = "User identifier"),
    ),
    responses(
        (status = 200, description = "Catalog with access flags", body = UserPermissionsResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(user_id = user_id))]
pub async fn get_user_permissions(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserPermissionsResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let user = Users::new(&mut conn)
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| Error::not_found("User", user_id))?;

    let catalog = Services::new(&mut conn).catalog_with_access(user_id).await?;

    Ok(Json(UserPermissionsResponse {
        user: UserSummary::from(user),
        permissions: catalog.into_iter().map(PermissionEntry::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/admin/permissions/{user_id}",
    tag = "permissions",
    summary = "Batch-update one user's service access",
    params(
        ("user_id" = i64, Path, description = "User identifier"),
    ),
    request_body = UpdatePermissionsRequest,
    responses(
        (status = 200, description = "Permissions updated", body = MessageResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Batch failed and was rolled back"),
    )
)]
#[tracing::instrument(skip_all, fields(user_id = user_id, edits = request.permissions.len()))]
pub async fn update_user_permissions(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(request): Json<UpdatePermissionsRequest>,
) -> Result<Json<MessageResponse>> {
    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;

    {
        let conn = tx.acquire().await.map_err(|e| Error::Database(e.into()))?;

        Users::new(conn)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| Error::not_found("User", user_id))?;
    }

    let apply = async {
        let conn = tx.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let mut repo = Services::new(conn);

        for edit in &request.permissions {
            if edit.has_access {
                repo.grant(user_id, edit.service_id).await?;
            } else {
                repo.revoke(user_id, edit.service_id).await?;
            }
        }

        Ok::<_, Error>(())
    };

    // Any failure rolls the whole batch back; the proximate cause is
    // surfaced to the caller
    if let Err(e) = apply.await {
        tx.rollback().await.map_err(|e| Error::Database(e.into()))?;
        return Err(Error::UpdateFailed {
            operation: "update permissions".to_string(),
            message: e.user_message(),
        });
    }

    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok(Json(MessageResponse::new("Permissions updated successfully")))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{create_test_app, create_test_user, seeded_service_ids};
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn permission_screen_shows_the_whole_catalog(pool: PgPool) {
        let user = create_test_user(&pool, "Meera", true).await;
        let service_count = seeded_service_ids(&pool).await.len();
        let server = create_test_app(pool).await;

        let body: serde_json::Value = server.get(&format!("/admin/permissions/{}", user.id)).await.json();
        assert_eq!(body["user"]["id"], json!(user.id));

        let permissions = body["permissions"].as_array().unwrap();
        assert_eq!(permissions.len(), service_count);
        assert!(permissions.iter().all(|p| p["has_access"] == json!(false)));
        // Stable order: ascending service_id
        let ids: Vec<i64> = permissions.iter().map(|p| p["service_id"].as_i64().unwrap()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn grant_and_revoke_round_trip(pool: PgPool) {
        let user = create_test_user(&pool, "Vikram", true).await;
        let service_ids = seeded_service_ids(&pool).await;
        let target = service_ids[0];
        let server = create_test_app(pool).await;

        let response = server
            .post(&format!("/admin/permissions/{}", user.id))
            .json(&json!({"permissions": [{"service_id": target, "has_access": true}]}))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = server.get(&format!("/admin/permissions/{}", user.id)).await.json();
        let permissions = body["permissions"].as_array().unwrap();
        // Catalog size is invariant under permission changes
        assert_eq!(permissions.len(), service_ids.len());
        let granted: Vec<i64> = permissions
            .iter()
            .filter(|p| p["has_access"] == json!(true))
            .map(|p| p["service_id"].as_i64().unwrap())
            .collect();
        assert_eq!(granted, vec![target]);

        let response = server
            .post(&format!("/admin/permissions/{}", user.id))
            .json(&json!({"permissions": [{"service_id": target, "has_access": false}]}))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = server.get(&format!("/admin/permissions/{}", user.id)).await.json();
        assert!(body["permissions"].as_array().unwrap().iter().all(|p| p["has_access"] == json!(false)));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn unlisted_services_are_untouched(pool: PgPool) {
        let user = create_test_user(&pool, "Asha", true).await;
        let service_ids = seeded_service_ids(&pool).await;
        let server = create_test_app(pool).await;

        server
            .post(&format!("/admin/permissions/{}", user.id))
            .json(&json!({"permissions": [
                {"service_id": service_ids[0], "has_access": true},
                {"service_id": service_ids[1], "has_access": true},
            ]}))
            .await
            .assert_status_ok();

        // A later batch that only mentions one service leaves the other alone
        server
            .post(&format!("/admin/permissions/{}", user.id))
            .json(&json!({"permissions": [{"service_id": service_ids[0], "has_access": false}]}))
            .await
            .assert_status_ok();

        let body: serde_json::Value = server.get(&format!("/admin/permissions/{}", user.id)).await.json();
        let granted: Vec<i64> = body["permissions"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|p| p["has_access"] == json!(true))
            .map(|p| p["service_id"].as_i64().unwrap())
            .collect();
        assert_eq!(granted, vec![service_ids[1]]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn failing_batch_rolls_back_entirely(pool: PgPool) {
        let user = create_test_user(&pool, "Ravi", true).await;
        let service_ids = seeded_service_ids(&pool).await;
        let server = create_test_app(pool.clone()).await;

        // Second edit violates the services foreign key, so the first grant
        // must be rolled back with it
        let response = server
            .post(&format!("/admin/permissions/{}", user.id))
            .json(&json!({"permissions": [
                {"service_id": service_ids[0], "has_access": true},
                {"service_id": 99999, "has_access": true},
            ]}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_service_access WHERE user_id = $1")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn unknown_user_is_a_404(pool: PgPool) {
        let server = create_test_app(pool).await;

        server.get("/admin/permissions/9999").await.assert_status(StatusCode::NOT_FOUND);
        server
            .post("/admin/permissions/9999")
            .json(&json!({"permissions": []}))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn dropdown_lists_only_active_users(pool: PgPool) {
        create_test_user(&pool, "Active User", true).await;
        create_test_user(&pool, "Disabled User", false).await;
        let server = create_test_app(pool).await;

        let body: serde_json::Value = server.get("/admin/permissions/users").await.json();
        let users = body["users"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["name"], json!("Active User"));
    }
}

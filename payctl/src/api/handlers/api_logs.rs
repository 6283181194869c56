//! Handler for the API call log viewer.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::AppState;
use crate::api::models::api_logs::{ApiLogDisplay, ApiLogQuery, ApiLogsResponse};
use crate::api::models::pagination::{PageQuery, PaginationMeta};
use crate::db::handlers::{ApiLogFilter, ApiLogs};
use crate::errors::{Error, Result};

#[utoipa::path(
    get,
    path = "/admin/api-logs",
    tag = "api-logs",
    summary = "List API call log records",
    params(ApiLogQuery),
    responses(
        (status = 200, description = "One page of log records", body = ApiLogsResponse),
        (status = 422, description = "Invalid filter or pagination values"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_api_logs(
    State(state): State<AppState>,
    Query(query): Query<ApiLogQuery>,
) -> Result<Json<ApiLogsResponse>> {
    let status = query.validate()?;
    let page = PageQuery {
        page: query.page,
        per_page: query.per_page,
    };
    page.validate()?;

    let filter = ApiLogFilter {
        id: query.id,
        user_id: query.user_id,
        api_name: query.api_name.clone(),
        status: status.map(|s| s.as_str().to_string()),
        search: query.search.clone(),
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = ApiLogs::new(&mut conn);

    let total = repo.count(&filter).await?;
    let rows = repo.list(&filter, page.per_page(), page.offset()).await?;

    Ok(Json(ApiLogsResponse {
        success: true,
        data: rows.into_iter().map(ApiLogDisplay::from).collect(),
        pagination: PaginationMeta::new(page.page(), page.per_page(), total),
    }))
}

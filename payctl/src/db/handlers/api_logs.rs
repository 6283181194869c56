//! Database repository for the append-only API call log.
//!
//! The log is written by the transaction pipeline; this service only reads
//! it. Filters combine with AND; the free-text `search` term is an OR over
//! the two correlation identifiers.

use sqlx::{PgConnection, Postgres, QueryBuilder};
use tracing::instrument;

use crate::db::errors::Result;
use crate::db::models::api_logs::ApiLogDBResponse;
use crate::types::{ApiLogId, UserId};

/// Filter for listing log records. All fields are AND-combined.
///
/// The substring filters pass the term into an ILIKE pattern verbatim, so
/// `%` and `_` keep their wildcard meaning. That matches the established
/// dashboard behavior, same as the case-insensitivity choice.
#[derive(Debug, Clone, Default)]
pub struct ApiLogFilter {
    pub id: Option<ApiLogId>,
    pub user_id: Option<UserId>,
    /// Case-insensitive substring match on api_name
    pub api_name: Option<String>,
    /// Exact match, one of success/failed/pending (validated upstream)
    pub status: Option<String>,
    /// Case-insensitive substring match on request_id OR reference_id
    pub search: Option<String>,
}

pub struct ApiLogs<'c> {
    db: &'c mut PgConnection,
}

impl<'c> ApiLogs<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    fn push_filters<'q>(query: &mut QueryBuilder<'q, Postgres>, filter: &'q ApiLogFilter) {
        if let Some(id) = filter.id {
            query.push(" AND id = ");
            query.push_bind(id);
        }
        if let Some(user_id) = filter.user_id {
            query.push(" AND user_id = ");
            query.push_bind(user_id);
        }
        if let Some(ref api_name) = filter.api_name {
            query.push(" AND api_name ILIKE ");
            query.push_bind(format!("%{api_name}%"));
        }
        if let Some(ref status) = filter.status {
            query.push(" AND status = ");
            query.push_bind(status);
        }
        if let Some(ref search) = filter.search {
            let pattern = format!("%{search}%");
            query.push(" AND (request_id ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR reference_id ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }
    }

    /// One page of matching records, oldest first.
    #[instrument(skip(self, filter), fields(limit = limit, offset = offset), err)]
    pub async fn list(&mut self, filter: &ApiLogFilter, limit: i64, offset: i64) -> Result<Vec<ApiLogDBResponse>> {
        let mut query = QueryBuilder::new("SELECT * FROM api_logs WHERE 1=1");
        Self::push_filters(&mut query, filter);
        query.push(" ORDER BY id LIMIT ");
        query.push_bind(limit);
        query.push(" OFFSET ");
        query.push_bind(offset);

        let rows = query.build_query_as::<ApiLogDBResponse>().fetch_all(&mut *self.db).await?;

        Ok(rows)
    }

    /// Total matching records, for pagination arithmetic.
    #[instrument(skip_all, err)]
    pub async fn count(&mut self, filter: &ApiLogFilter) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM api_logs WHERE 1=1");
        Self::push_filters(&mut query, filter);

        let (total,): (i64,) = query.build_query_as().fetch_one(&mut *self.db).await?;

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seed_api_log;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn search_matches_either_correlation_id(pool: PgPool) {
        seed_api_log(&pool, Some("recharge"), Some("REQ-ABC-1"), None, Some("success")).await;
        seed_api_log(&pool, Some("recharge"), None, Some("REF-abc-2"), Some("failed")).await;
        seed_api_log(&pool, Some("billpay"), Some("REQ-XYZ-3"), Some("REF-XYZ-3"), Some("success")).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = ApiLogs::new(&mut conn);

        // Case-insensitive, OR over request_id and reference_id
        let filter = ApiLogFilter {
            search: Some("abc".to_string()),
            ..ApiLogFilter::default()
        };
        assert_eq!(repo.count(&filter).await.unwrap(), 2);

        let rows = repo.list(&filter, 10, 0).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn filters_are_and_combined(pool: PgPool) {
        seed_api_log(&pool, Some("recharge"), Some("REQ-1"), None, Some("success")).await;
        seed_api_log(&pool, Some("recharge"), Some("REQ-2"), None, Some("failed")).await;
        seed_api_log(&pool, Some("billpay"), Some("REQ-3"), None, Some("failed")).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = ApiLogs::new(&mut conn);

        let filter = ApiLogFilter {
            api_name: Some("RECHARGE".to_string()),
            status: Some("failed".to_string()),
            ..ApiLogFilter::default()
        };
        let rows = repo.list(&filter, 10, 0).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].request_id.as_deref(), Some("REQ-2"));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn wildcards_in_the_search_term_keep_their_meaning(pool: PgPool) {
        seed_api_log(&pool, Some("recharge"), Some("REQ-100"), None, Some("success")).await;
        seed_api_log(&pool, Some("recharge"), Some("REQ-105"), None, Some("success")).await;
        seed_api_log(&pool, Some("recharge"), Some("REQ-200"), None, Some("success")).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = ApiLogs::new(&mut conn);

        // "1%5" is not a literal substring of any request_id, but % keeps its
        // ILIKE wildcard meaning and matches REQ-105
        let filter = ApiLogFilter {
            search: Some("1%5".to_string()),
            ..ApiLogFilter::default()
        };
        let rows = repo.list(&filter, 10, 0).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].request_id.as_deref(), Some("REQ-105"));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn limit_and_offset_page_through_results(pool: PgPool) {
        for i in 0..25 {
            seed_api_log(&pool, Some("recharge"), Some(&format!("REQ-{i}")), None, Some("success")).await;
        }

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = ApiLogs::new(&mut conn);

        let filter = ApiLogFilter::default();
        assert_eq!(repo.count(&filter).await.unwrap(), 25);

        let page_two = repo.list(&filter, 10, 10).await.unwrap();
        assert_eq!(page_two.len(), 10);
        // Oldest first, so page two starts at the eleventh row
        assert_eq!(page_two[0].request_id.as_deref(), Some("REQ-10"));

        let last_page = repo.list(&filter, 10, 20).await.unwrap();
        assert_eq!(last_page.len(), 5);
    }
}

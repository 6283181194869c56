//! Database repository for merchant onboarding requests.

use sqlx::PgConnection;
use tracing::instrument;

use crate::db::errors::Result;
use crate::db::models::onboarding::OnboardRequestDBResponse;

pub struct OnboardRequests<'c> {
    db: &'c mut PgConnection,
}

impl<'c> OnboardRequests<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// All onboarding requests, unfiltered. The queue is small enough that
    /// the admin screen takes the whole set.
    #[instrument(skip_all, err)]
    pub async fn list(&mut self) -> Result<Vec<OnboardRequestDBResponse>> {
        let rows = sqlx::query_as::<_, OnboardRequestDBResponse>("SELECT * FROM onboard_requests ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(rows)
    }

    /// Set approval status, returning the updated row. None when the id does
    /// not exist.
    #[instrument(skip(self), fields(id = id, status = status), err)]
    pub async fn update_status(&mut self, id: i64, status: bool) -> Result<Option<OnboardRequestDBResponse>> {
        let row = sqlx::query_as::<_, OnboardRequestDBResponse>(
            "UPDATE onboard_requests SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(row)
    }
}

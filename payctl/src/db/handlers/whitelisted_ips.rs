//! Database repository for the IP whitelist.

use sqlx::PgConnection;
use tracing::instrument;

use crate::db::errors::Result;
use crate::db::models::whitelisted_ips::WhitelistedIpDBResponse;

pub struct WhitelistedIps<'c> {
    db: &'c mut PgConnection,
}

impl<'c> WhitelistedIps<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip_all, err)]
    pub async fn list(&mut self) -> Result<Vec<WhitelistedIpDBResponse>> {
        let rows = sqlx::query_as::<_, WhitelistedIpDBResponse>("SELECT * FROM whitelisting_ips ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(rows)
    }

    /// Flip the status boolean atomically, returning the updated row. None
    /// when the id does not exist.
    #[instrument(skip(self), fields(id = id), err)]
    pub async fn toggle_status(&mut self, id: i64) -> Result<Option<WhitelistedIpDBResponse>> {
        let row = sqlx::query_as::<_, WhitelistedIpDBResponse>(
            "UPDATE whitelisting_ips SET status = NOT status, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(row)
    }
}

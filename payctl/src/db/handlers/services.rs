//! Database repository for the service catalog and per-user access grants.

use sqlx::PgConnection;
use tracing::instrument;

use crate::db::errors::Result;
use crate::db::models::services::ServiceWithAccess;
use crate::types::{ServiceId, UserId};

pub struct Services<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Services<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// The full service catalog with one user's grant set folded in as a
    /// `has_access` flag. Always returns every catalog entry, ordered by
    /// service_id so the admin screen is stable across calls.
    #[instrument(skip(self), fields(user_id = user_id), err)]
    pub async fn catalog_with_access(&mut self, user_id: UserId) -> Result<Vec<ServiceWithAccess>> {
        let rows = sqlx::query_as::<_, ServiceWithAccess>(
            "SELECT s.service_id, s.service_name, s.description, s.category_id, \
                    c.category_name, (usa.user_id IS NOT NULL) AS has_access \
             FROM services s \
             LEFT JOIN service_categories c ON c.category_id = s.category_id \
             LEFT JOIN user_service_access usa \
                    ON usa.service_id = s.service_id AND usa.user_id = $1 \
             ORDER BY s.service_id",
        )
        .bind(user_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    /// Grant access. A no-op when the grant already exists, so `granted_at`
    /// keeps the original timestamp.
    #[instrument(skip(self), fields(user_id = user_id, service_id = service_id), err)]
    pub async fn grant(&mut self, user_id: UserId, service_id: ServiceId) -> Result<()> {
        sqlx::query(
            "INSERT INTO user_service_access (user_id, service_id, granted_at) \
             VALUES ($1, $2, NOW()) \
             ON CONFLICT (user_id, service_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(service_id)
        .execute(&mut *self.db)
        .await?;

        Ok(())
    }

    /// Revoke access. Hard delete; a no-op when no grant exists.
    #[instrument(skip(self), fields(user_id = user_id, service_id = service_id), err)]
    pub async fn revoke(&mut self, user_id: UserId, service_id: ServiceId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM user_service_access WHERE user_id = $1 AND service_id = $2")
            .bind(user_id)
            .bind(service_id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

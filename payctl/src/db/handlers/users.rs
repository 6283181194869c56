//! Read-side repository for user accounts.
//!
//! Account lifecycle (signup, deletion, password reset) is owned by the
//! customer-facing application; this service only needs lookups and the
//! dropdown listings for the admin screens.

use sqlx::PgConnection;
use tracing::instrument;

use crate::db::errors::Result;
use crate::db::models::users::UserDBResponse;
use crate::types::UserId;

pub struct Users<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Users<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), fields(user_id = id), err)]
    pub async fn get_by_id(&mut self, id: UserId) -> Result<Option<UserDBResponse>> {
        let user = sqlx::query_as::<_, UserDBResponse>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(user)
    }

    /// All users, for the commission override dropdown.
    #[instrument(skip_all, err)]
    pub async fn list(&mut self) -> Result<Vec<UserDBResponse>> {
        let users = sqlx::query_as::<_, UserDBResponse>("SELECT * FROM users ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(users)
    }

    /// Active users only, for the permission assignment dropdown.
    #[instrument(skip_all, err)]
    pub async fn list_active(&mut self) -> Result<Vec<UserDBResponse>> {
        let users = sqlx::query_as::<_, UserDBResponse>("SELECT * FROM users WHERE status = TRUE ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(users)
    }
}

//! Database repository for per-user commission overrides.

use sqlx::PgConnection;
use tracing::instrument;

use crate::db::errors::Result;
use crate::db::models::user_commissions::{UserCommissionDBResponse, UserCommissionUpsertDBRequest};
use crate::types::UserId;

pub struct UserCommissions<'c> {
    db: &'c mut PgConnection,
}

impl<'c> UserCommissions<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), fields(user_id = user_id), err)]
    pub async fn list_for_user(&mut self, user_id: UserId) -> Result<Vec<UserCommissionDBResponse>> {
        let rows = sqlx::query_as::<_, UserCommissionDBResponse>(
            "SELECT * FROM user_commissions WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    /// Upsert one override, keyed by (user_id, commission_type, commission_id).
    ///
    /// The table carries no unique constraint on the triple, so the upsert is
    /// an explicit find-then-branch rather than ON CONFLICT. Applying the same
    /// edit twice updates in place and leaves the row count unchanged.
    #[instrument(
        skip(self, request),
        fields(user_id = request.user_id, commission_type = %request.commission_type, commission_id = request.commission_id),
        err
    )]
    pub async fn upsert(&mut self, request: &UserCommissionUpsertDBRequest) -> Result<UserCommissionDBResponse> {
        let existing: Option<(i64,)> = sqlx::query_as(
            "SELECT id FROM user_commissions \
             WHERE user_id = $1 AND commission_type = $2 AND commission_id = $3",
        )
        .bind(request.user_id)
        .bind(request.commission_type.as_str())
        .bind(request.commission_id)
        .fetch_optional(&mut *self.db)
        .await?;

        let row = match existing {
            Some((id,)) => {
                sqlx::query_as::<_, UserCommissionDBResponse>(
                    "UPDATE user_commissions \
                     SET user_commission = $2, updated_at = NOW() \
                     WHERE id = $1 RETURNING *",
                )
                .bind(id)
                .bind(request.user_commission)
                .fetch_one(&mut *self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, UserCommissionDBResponse>(
                    "INSERT INTO user_commissions (user_id, commission_type, commission_id, user_commission) \
                     VALUES ($1, $2, $3, $4) RETURNING *",
                )
                .bind(request.user_id)
                .bind(request.commission_type.as_str())
                .bind(request.commission_id)
                .bind(request.user_commission)
                .fetch_one(&mut *self.db)
                .await?
            }
        };

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_user;
    use crate::types::CommissionCategory;
    use rust_decimal::Decimal;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn upsert_is_idempotent_on_the_triple(pool: PgPool) {
        let user = create_test_user(&pool, "Asha", true).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = UserCommissions::new(&mut conn);

        let mut request = UserCommissionUpsertDBRequest {
            user_id: user.id,
            commission_type: CommissionCategory::Recharge,
            commission_id: 7,
            user_commission: Decimal::new(150, 2),
        };
        let first = repo.upsert(&request).await.unwrap();

        request.user_commission = Decimal::new(225, 2);
        let second = repo.upsert(&request).await.unwrap();

        // Same row updated in place, not a second row
        assert_eq!(first.id, second.id);
        assert_eq!(second.user_commission, Decimal::new(225, 2));

        let rows = repo.list_for_user(user.id).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn distinct_triples_create_distinct_rows(pool: PgPool) {
        let user = create_test_user(&pool, "Ravi", true).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = UserCommissions::new(&mut conn);

        for (category, commission_id) in [
            (CommissionCategory::Recharge, 1),
            (CommissionCategory::Recharge, 2),
            (CommissionCategory::Electricity, 1),
        ] {
            repo.upsert(&UserCommissionUpsertDBRequest {
                user_id: user.id,
                commission_type: category,
                commission_id,
                user_commission: Decimal::ONE,
            })
            .await
            .unwrap();
        }

        let rows = repo.list_for_user(user.id).await.unwrap();
        assert_eq!(rows.len(), 3);
    }
}

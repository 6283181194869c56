//! Database repository for the ten commission catalog tables.
//!
//! Catalog reads are per-category because the row shapes differ; rate updates
//! are shared, dispatching on [`CommissionCategory::table`] so the table name
//! is always one of the ten static identifiers.

use rust_decimal::Decimal;
use sqlx::PgConnection;
use tracing::instrument;

use crate::db::errors::Result;
use crate::db::models::commissions::{
    BankCommissionView, BroadbandCommissionView, DefaultCommissions, GasFastagCommissionView,
    OperatorCommissionView, RechargeCommissionView,
};
use crate::types::{CommissionCategory, CommissionId};

pub struct Commissions<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Commissions<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Load all ten catalogs. All-or-nothing: the first failing table aborts
    /// the load.
    #[instrument(skip_all, err)]
    pub async fn load_all(&mut self) -> Result<DefaultCommissions> {
        Ok(DefaultCommissions {
            recharge_commissions: self.list_recharge().await?,
            electricity_commissions: self.list_operator(CommissionCategory::Electricity).await?,
            digital_voucher_commissions: self.list_operator(CommissionCategory::DigitalVoucher).await?,
            datacard_commissions: self.list_operator(CommissionCategory::Datacard).await?,
            gas_fastag_commissions: self.list_gas_fastag().await?,
            cms_commissions: self.list_operator(CommissionCategory::Cms).await?,
            challan_commissions: self.list_operator(CommissionCategory::Challan).await?,
            cable_commissions: self.list_operator(CommissionCategory::Cable).await?,
            broadband_commissions: self.list_broadband().await?,
            bank_commissions: self.list_bank().await?,
        })
    }

    /// The recharge catalog exposes `server_1_commission` under the unified
    /// `commission` key.
    #[instrument(skip_all, err)]
    pub async fn list_recharge(&mut self) -> Result<Vec<RechargeCommissionView>> {
        let rows = sqlx::query_as::<_, RechargeCommissionView>(
            "SELECT id, operator_name, operator_id, category, \
             server_1_commission AS commission, our_commission \
             FROM recharge_commissions ORDER BY id",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    /// Catalogs sharing the operator/type row shape: electricity,
    /// digital_voucher, datacard, cms, challan, cable.
    #[instrument(skip(self), fields(category = %category), err)]
    pub async fn list_operator(&mut self, category: CommissionCategory) -> Result<Vec<OperatorCommissionView>> {
        debug_assert!(matches!(
            category,
            CommissionCategory::Electricity
                | CommissionCategory::DigitalVoucher
                | CommissionCategory::Datacard
                | CommissionCategory::Cms
                | CommissionCategory::Challan
                | CommissionCategory::Cable
        ));

        let sql = format!(
            "SELECT id, operator_name, operator_id, type, commission, our_commission \
             FROM {} ORDER BY id",
            category.table()
        );
        let rows = sqlx::query_as::<_, OperatorCommissionView>(&sql).fetch_all(&mut *self.db).await?;

        Ok(rows)
    }

    #[instrument(skip_all, err)]
    pub async fn list_gas_fastag(&mut self) -> Result<Vec<GasFastagCommissionView>> {
        let rows = sqlx::query_as::<_, GasFastagCommissionView>(
            "SELECT id, operator_name, category, type, commission, our_commission \
             FROM gas_fastag_commissions ORDER BY id",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    #[instrument(skip_all, err)]
    pub async fn list_broadband(&mut self) -> Result<Vec<BroadbandCommissionView>> {
        let rows = sqlx::query_as::<_, BroadbandCommissionView>(
            "SELECT id, operator_name, operator_id, category, type, commission, our_commission \
             FROM broadband_commissions ORDER BY id",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    #[instrument(skip_all, err)]
    pub async fn list_bank(&mut self) -> Result<Vec<BankCommissionView>> {
        let rows = sqlx::query_as::<_, BankCommissionView>(
            "SELECT id, transaction_amount, category, commission, our_commission \
             FROM bank_commissions ORDER BY id",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    /// Set the platform margin for one catalog row. Only `our_commission` is
    /// writable through this path; the provider default is never touched.
    ///
    /// Returns false when the id does not exist in the category's table (the
    /// caller treats that as a no-op, not an error).
    #[instrument(skip(self), fields(category = %category, id = id), err)]
    pub async fn update_rate(&mut self, category: CommissionCategory, id: CommissionId, our_commission: Decimal) -> Result<bool> {
        // table() returns a static identifier, so interpolation is safe here
        let sql = format!(
            "UPDATE {} SET our_commission = $1, updated_at = NOW() WHERE id = $2",
            category.table()
        );
        let result = sqlx::query(&sql).bind(our_commission).bind(id).execute(&mut *self.db).await?;

        Ok(result.rows_affected() > 0)
    }
}

//! Row shapes for the ten commission catalog tables.
//!
//! Each category keeps its own table and its own row shape, so there is one
//! view struct per shape rather than a lowest-common-denominator record.
//! Six categories (electricity, digital_voucher, datacard, cms, challan,
//! cable) share an identical shape and therefore share [`OperatorCommissionView`].
//!
//! The recharge catalog is the odd one out: its provider default lives in the
//! `server_1_commission` column, which the catalog query aliases to the
//! unified `commission` key so every category presents the same
//! `commission` / `our_commission` pair on the wire.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::types::CommissionId;

/// Row of the `recharge_commissions` catalog.
///
/// `commission` is selected as `server_1_commission AS commission`.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct RechargeCommissionView {
    pub id: CommissionId,
    pub operator_name: String,
    pub operator_id: String,
    pub category: String,
    #[schema(value_type = f64)]
    pub commission: Decimal,
    #[schema(value_type = f64)]
    pub our_commission: Decimal,
}

/// Shared row shape for the electricity, digital_voucher, datacard, cms,
/// challan and cable catalogs.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OperatorCommissionView {
    pub id: CommissionId,
    pub operator_name: String,
    pub operator_id: String,
    pub r#type: String,
    #[schema(value_type = f64)]
    pub commission: Decimal,
    #[schema(value_type = f64)]
    pub our_commission: Decimal,
}

/// Row of the `gas_fastag_commissions` catalog. No operator_id column.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct GasFastagCommissionView {
    pub id: CommissionId,
    pub operator_name: String,
    pub category: String,
    pub r#type: String,
    #[schema(value_type = f64)]
    pub commission: Decimal,
    #[schema(value_type = f64)]
    pub our_commission: Decimal,
}

/// Row of the `broadband_commissions` catalog; carries both category and type.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BroadbandCommissionView {
    pub id: CommissionId,
    pub operator_name: String,
    pub operator_id: String,
    pub category: String,
    pub r#type: String,
    #[schema(value_type = f64)]
    pub commission: Decimal,
    #[schema(value_type = f64)]
    pub our_commission: Decimal,
}

/// Row of the `bank_commissions` catalog. Slab-based: rates are keyed by
/// transaction amount rather than by operator.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BankCommissionView {
    pub id: CommissionId,
    #[schema(value_type = f64)]
    pub transaction_amount: Decimal,
    pub category: String,
    #[schema(value_type = f64)]
    pub commission: Decimal,
    #[schema(value_type = f64)]
    pub our_commission: Decimal,
}

/// The full default-commission catalog: one array per category, always all
/// ten keys, in catalog order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DefaultCommissions {
    pub recharge_commissions: Vec<RechargeCommissionView>,
    pub electricity_commissions: Vec<OperatorCommissionView>,
    pub digital_voucher_commissions: Vec<OperatorCommissionView>,
    pub datacard_commissions: Vec<OperatorCommissionView>,
    pub gas_fastag_commissions: Vec<GasFastagCommissionView>,
    pub cms_commissions: Vec<OperatorCommissionView>,
    pub challan_commissions: Vec<OperatorCommissionView>,
    pub cable_commissions: Vec<OperatorCommissionView>,
    pub broadband_commissions: Vec<BroadbandCommissionView>,
    pub bank_commissions: Vec<BankCommissionView>,
}

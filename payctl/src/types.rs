//! Common type definitions shared across the crate.
//!
//! This module defines:
//! - Type aliases for entity IDs (UserId, ServiceId, etc.)
//! - The [`CommissionCategory`] enum covering the ten commission catalogs
//!
//! # ID Types
//!
//! All entity IDs are 64-bit integers (BIGSERIAL primary keys) wrapped in type
//! aliases for readability:
//!
//! - [`UserId`]: User account identifier
//! - [`ServiceId`]: Service catalog identifier
//! - [`CategoryId`]: Service category identifier
//! - [`CommissionId`]: Row identifier within a single commission catalog table
//!   (unique per category table only; lookups are always scoped by category)
//! - [`ApiLogId`]: API log record identifier

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

// Type aliases for IDs
pub type UserId = i64;
pub type ServiceId = i64;
pub type CategoryId = i64;
pub type CommissionId = i64;
pub type ApiLogId = i64;

/// The ten commission catalogs managed by the platform.
///
/// Each variant is backed by its own table with a category-specific row shape.
/// The wire representation is the snake_case category identifier
/// (e.g. `digital_voucher`), matching the `{type}` path segment of the
/// commission update endpoint and the `commission_type` column of user
/// overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommissionCategory {
    Recharge,
    Electricity,
    DigitalVoucher,
    Datacard,
    GasFastag,
    Cms,
    Challan,
    Cable,
    Broadband,
    Bank,
}

impl CommissionCategory {
    /// All categories, in catalog order. The order is load-bearing: the
    /// default-commission response emits one array per category in this order.
    pub const ALL: [CommissionCategory; 10] = [
        CommissionCategory::Recharge,
        CommissionCategory::Electricity,
        CommissionCategory::DigitalVoucher,
        CommissionCategory::Datacard,
        CommissionCategory::GasFastag,
        CommissionCategory::Cms,
        CommissionCategory::Challan,
        CommissionCategory::Cable,
        CommissionCategory::Broadband,
        CommissionCategory::Bank,
    ];

    /// The snake_case identifier used on the wire and in `commission_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionCategory::Recharge => "recharge",
            CommissionCategory::Electricity => "electricity",
            CommissionCategory::DigitalVoucher => "digital_voucher",
            CommissionCategory::Datacard => "datacard",
            CommissionCategory::GasFastag => "gas_fastag",
            CommissionCategory::Cms => "cms",
            CommissionCategory::Challan => "challan",
            CommissionCategory::Cable => "cable",
            CommissionCategory::Broadband => "broadband",
            CommissionCategory::Bank => "bank",
        }
    }

    /// The backing catalog table for this category.
    pub fn table(&self) -> &'static str {
        match self {
            CommissionCategory::Recharge => "recharge_commissions",
            CommissionCategory::Electricity => "electricity_commissions",
            CommissionCategory::DigitalVoucher => "digital_voucher_commissions",
            CommissionCategory::Datacard => "datacard_commissions",
            CommissionCategory::GasFastag => "gas_fastag_commissions",
            CommissionCategory::Cms => "cms_commissions",
            CommissionCategory::Challan => "challan_commissions",
            CommissionCategory::Cable => "cable_commissions",
            CommissionCategory::Broadband => "broadband_commissions",
            CommissionCategory::Bank => "bank_commissions",
        }
    }

    /// The column holding the upstream provider's default rate. Recharge is
    /// the odd one out: its default rate lives in `server_1_commission` and is
    /// exposed on the wire under the unified `commission` key.
    pub fn default_rate_column(&self) -> &'static str {
        match self {
            CommissionCategory::Recharge => "server_1_commission",
            _ => "commission",
        }
    }
}

impl fmt::Display for CommissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommissionCategory {
    type Err = UnknownCommissionCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownCommissionCategory(s.to_string()))
    }
}

/// Error returned when a string does not name one of the ten categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommissionCategory(pub String);

impl fmt::Display for UnknownCommissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown commission category: {}", self.0)
    }
}

impl std::error::Error for UnknownCommissionCategory {}

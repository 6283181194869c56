//! API request/response types.
//!
//! These are the wire shapes. They convert from the `db::models` records and
//! never expose storage-only columns.

pub mod api_logs;
pub mod commissions;
pub mod common;
pub mod onboarding;
pub mod pagination;
pub mod permissions;
pub mod users;
pub mod whitelisted_ips;

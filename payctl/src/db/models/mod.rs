//! Database record structures matching table schemas.

pub mod api_logs;
pub mod commissions;
pub mod onboarding;
pub mod services;
pub mod user_commissions;
pub mod users;
pub mod whitelisted_ips;

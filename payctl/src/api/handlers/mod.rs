//! Request handlers for the admin API.

pub mod api_logs;
pub mod commissions;
pub mod onboarding;
pub mod permissions;
pub mod whitelisted_ips;

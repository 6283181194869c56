//! Repository implementations for database operations.
//!
//! Each repository wraps a `&mut PgConnection` and owns all SQL for one
//! entity. Handlers never write SQL directly; they compose repositories,
//! opening a transaction when a batch must be atomic.

pub mod api_logs;
pub mod commissions;
pub mod onboarding;
pub mod services;
pub mod user_commissions;
pub mod users;
pub mod whitelisted_ips;

pub use api_logs::{ApiLogFilter, ApiLogs};
pub use commissions::Commissions;
pub use onboarding::OnboardRequests;
pub use services::Services;
pub use user_commissions::UserCommissions;
pub use users::Users;
pub use whitelisted_ips::WhitelistedIps;

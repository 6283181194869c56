//! OpenAPI documentation, served interactively at `/admin/docs`.

use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "payctl Admin API",
        description = "Back-office API for commission, permission and operational log management"
    ),
    paths(
        handlers::commissions::get_default_commissions,
        handlers::commissions::update_commissions,
        handlers::commissions::list_users,
        handlers::commissions::get_user_commissions,
        handlers::commissions::update_user_commissions,
        handlers::permissions::list_users,
        handlers::permissions::get_user_permissions,
        handlers::permissions::update_user_permissions,
        handlers::api_logs::list_api_logs,
        handlers::onboarding::list_onboard_requests,
        handlers::onboarding::update_onboard_status,
        handlers::whitelisted_ips::list_whitelisted_ips,
        handlers::whitelisted_ips::toggle_ip_status,
    ),
    components(schemas(
        crate::types::CommissionCategory,
        crate::db::models::commissions::RechargeCommissionView,
        crate::db::models::commissions::OperatorCommissionView,
        crate::db::models::commissions::GasFastagCommissionView,
        crate::db::models::commissions::BroadbandCommissionView,
        crate::db::models::commissions::BankCommissionView,
        crate::db::models::commissions::DefaultCommissions,
        crate::db::models::onboarding::OnboardRequestDBResponse,
        crate::db::models::whitelisted_ips::WhitelistedIpDBResponse,
        models::commissions::CommissionRateEdit,
        models::commissions::UserCommissionEdit,
        models::commissions::UserCommissionItem,
        models::commissions::UserCommissionsData,
        models::common::MessageResponse,
        models::pagination::PaginationMeta,
        models::permissions::PermissionEntry,
        models::permissions::PermissionEdit,
        models::permissions::UpdatePermissionsRequest,
        models::permissions::UserPermissionsResponse,
        models::permissions::UsersResponse,
        models::users::UserSummary,
        models::users::UserOption,
        models::api_logs::LogStatus,
        models::api_logs::ApiLogDisplay,
        models::api_logs::ApiLogsResponse,
        models::onboarding::OnboardRequestsResponse,
        models::onboarding::UpdateStatusRequest,
        models::onboarding::OnboardStatusResponse,
        models::whitelisted_ips::WhitelistedIpsResponse,
        models::whitelisted_ips::ToggleStatusResponse,
    )),
    tags(
        (name = "commissions", description = "Default commission catalogs and per-user overrides"),
        (name = "permissions", description = "Per-user service access"),
        (name = "api-logs", description = "API call log viewer"),
        (name = "onboarding", description = "Merchant onboarding requests"),
        (name = "whitelisted-ips", description = "IP whitelist management"),
    )
)]
pub struct ApiDoc;

//! Request/response shapes for merchant onboarding requests.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::models::onboarding::OnboardRequestDBResponse;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OnboardRequestsResponse {
    pub onboard_requests: Vec<OnboardRequestDBResponse>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: bool,
}

/// Acknowledgement echoing the updated request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OnboardStatusResponse {
    pub message: String,
    pub onboard_request: OnboardRequestDBResponse,
}

//! Request/response shapes for the API log viewer.
//!
//! Log rows are presented as flat strings: the viewer renders every column
//! verbatim, so missing values become `"-"` and JSON payloads are
//! re-serialized to display strings here rather than in the frontend.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::fmt;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};

use crate::api::models::pagination::PaginationMeta;
use crate::db::models::api_logs::ApiLogDBResponse;
use crate::errors::Error;
use crate::types::{ApiLogId, UserId};

/// Record status values accepted by the `status` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Success,
    Failed,
    Pending,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Success => "success",
            LogStatus::Failed => "failed",
            LogStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(LogStatus::Success),
            "failed" => Ok(LogStatus::Failed),
            "pending" => Ok(LogStatus::Pending),
            other => Err(Error::validation(format!(
                "status must be one of success, failed, pending (got '{other}')"
            ))),
        }
    }
}

/// Query parameters for the log listing. All filters are optional and
/// AND-combined; `search` matches either correlation identifier.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ApiLogQuery {
    /// 1-based page number (default: 1)
    #[param(default = 1, minimum = 1)]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub page: Option<i64>,

    /// Items per page (default: 10, max: 100)
    #[param(default = 10, minimum = 1, maximum = 100)]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub per_page: Option<i64>,

    /// Exact record id
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub id: Option<ApiLogId>,

    /// Exact user id
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub user_id: Option<UserId>,

    /// Case-insensitive substring match on the API name
    pub api_name: Option<String>,

    /// One of success, failed, pending
    pub status: Option<String>,

    /// Case-insensitive substring match on request_id or reference_id
    pub search: Option<String>,
}

impl ApiLogQuery {
    const MAX_TEXT_FILTER: usize = 255;

    /// Validate filter values, returning the parsed status if present.
    pub fn validate(&self) -> Result<Option<LogStatus>, Error> {
        if let Some(id) = self.id {
            if id < 1 {
                return Err(Error::validation("id must be at least 1"));
            }
        }
        if let Some(user_id) = self.user_id {
            if user_id < 1 {
                return Err(Error::validation("user_id must be at least 1"));
            }
        }
        if let Some(ref api_name) = self.api_name {
            if api_name.len() > Self::MAX_TEXT_FILTER {
                return Err(Error::validation("api_name must be at most 255 characters"));
            }
        }
        if let Some(ref search) = self.search {
            if search.len() > Self::MAX_TEXT_FILTER {
                return Err(Error::validation("search must be at most 255 characters"));
            }
        }

        self.status.as_deref().map(LogStatus::from_str).transpose()
    }
}

/// A log record flattened for display. Every field is a string; absent
/// values are rendered as `"-"`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiLogDisplay {
    pub id: ApiLogId,
    pub user_id: String,
    pub api_name: String,
    pub request_id: String,
    pub reference_id: String,
    pub request_payload: String,
    pub response_data: String,
    pub status: String,
    pub error_message: String,
    pub ip_address: String,
    pub execution_time: String,
    pub created_at: String,
    pub updated_at: String,
}

const MISSING: &str = "-";

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING.to_string())
}

impl From<ApiLogDBResponse> for ApiLogDisplay {
    fn from(row: ApiLogDBResponse) -> Self {
        Self {
            id: row.id,
            user_id: or_dash(row.user_id.map(|v| v.to_string())),
            api_name: or_dash(row.api_name),
            request_id: or_dash(row.request_id),
            reference_id: or_dash(row.reference_id),
            request_payload: or_dash(row.request_payload.as_ref().map(|v| v.to_string())),
            response_data: or_dash(row.response_data.as_ref().map(|v| v.to_string())),
            status: or_dash(row.status),
            error_message: or_dash(row.error_message),
            ip_address: or_dash(row.ip_address),
            execution_time: or_dash(row.execution_time.map(|v| v.to_string())),
            created_at: or_dash(row.created_at.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())),
            updated_at: or_dash(row.updated_at.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())),
        }
    }
}

/// The paged log listing envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiLogsResponse {
    pub success: bool,
    pub data: Vec<ApiLogDisplay>,
    pub pagination: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_row() -> ApiLogDBResponse {
        ApiLogDBResponse {
            id: 1,
            user_id: None,
            api_name: None,
            request_id: None,
            reference_id: None,
            request_payload: None,
            response_data: None,
            status: None,
            error_message: None,
            ip_address: None,
            execution_time: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn missing_fields_render_as_dash() {
        let display = ApiLogDisplay::from(empty_row());
        assert_eq!(display.user_id, "-");
        assert_eq!(display.api_name, "-");
        assert_eq!(display.request_payload, "-");
        assert_eq!(display.created_at, "-");
    }

    #[test]
    fn json_payloads_are_rendered_as_strings() {
        let row = ApiLogDBResponse {
            request_payload: Some(serde_json::json!({"amount": 100})),
            ..empty_row()
        };
        let display = ApiLogDisplay::from(row);
        assert_eq!(display.request_payload, r#"{"amount":100}"#);
    }

    #[test]
    fn unknown_status_filter_is_rejected() {
        let query = ApiLogQuery {
            status: Some("cancelled".to_string()),
            ..ApiLogQuery::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn valid_status_filter_parses() {
        let query = ApiLogQuery {
            status: Some("pending".to_string()),
            ..ApiLogQuery::default()
        };
        assert_eq!(query.validate().unwrap(), Some(LogStatus::Pending));
    }
}

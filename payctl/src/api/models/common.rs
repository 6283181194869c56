//! Shared response types.

use serde::Serialize;
use utoipa::ToSchema;

/// Success acknowledgement for mutations that return no payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

//! Shared API response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error payload returned on 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation payload for successful write operations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

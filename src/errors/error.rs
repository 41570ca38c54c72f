use serde::Serialize;
use utoipa::ToSchema;

/// Error body for the JSON endpoints: `{"error": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

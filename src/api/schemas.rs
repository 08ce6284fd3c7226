use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "PROJECT_STORAGE_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Project storage not found")]
    pub message: String,
}

//! Response bodies shared by every endpoint

use serde::Serialize;
use utoipa::ToSchema;

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "employee 6f1c1e1a-3f5e-4d7b-9a51-2f1f4b0f9c11 not found")]
    pub error: String,
}

/// One rejected field
#[derive(Debug, Serialize, ToSchema)]
pub struct ViolationResponse {
    /// Field path, `$` for the whole body
    #[schema(example = "hireDate")]
    pub field: String,
    /// Machine-readable constraint code
    #[schema(example = "isDate")]
    pub constraint: String,
    #[schema(example = "must be an ISO-8601 date (YYYY-MM-DD)")]
    pub message: String,
}

/// Body of a 400 response
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = "Validation failed")]
    pub error: String,
    pub violations: Vec<ViolationResponse>,
}

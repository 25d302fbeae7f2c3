// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Calculation not found")]
    pub error: String,

    /// Error code for programmatic handling
    #[schema(example = "CALCULATION_NOT_FOUND")]
    pub code: String,
}

//! Response envelope schemas for the OpenAPI document. The live envelope
//! is built by [`crate::shared::api::ApiResponse`]; these mirror its shape
//! for documentation purposes.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "USER_NOT_FOUND")]
    pub code: String,
    #[schema(example = "User not found")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

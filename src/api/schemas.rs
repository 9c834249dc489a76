use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for 2xx responses: `{"success": true, "data": ...}`.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope for error responses: `{"success": false, "error": {...}}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

/// Machine-readable code plus a human-readable message.
#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "CONTACT_NOT_FOUND")]
    pub code: String,
    #[schema(example = "Contact not found")]
    pub message: String,
}

// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Plain message body used for confirmations and most errors
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Post not found")]
    pub msg: String,
}

/// Body returned when request validation fails
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldErrorDetail>,
}

#[derive(Serialize, ToSchema)]
pub struct FieldErrorDetail {
    /// Human-readable error message
    #[schema(example = "Status is required")]
    pub msg: String,

    /// Offending request field, absent for errors not tied to one field
    #[schema(example = "status")]
    pub param: Option<String>,

    #[schema(example = "body")]
    pub location: Option<String>,
}

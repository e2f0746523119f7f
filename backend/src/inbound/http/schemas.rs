//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their serialised shape and register under the domain
//! type's path.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or the store rejected it.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The email is already registered.
    #[schema(rename = "conflict")]
    Conflict,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    /// Human-readable message; store failures carry the store's message.
    #[schema(example = "Email already exists.")]
    message: String,
    /// Same text as `message`, under the key store clients read.
    #[schema(example = "Email already exists.")]
    detail: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "6f9c1f5e-2b8a-4c9e-9a57-1f0f3a0d2c11")]
    trace_id: Option<String>,
    /// Supplementary details, such as the outcome of a rolled back product.
    details: Option<serde_json::Value>,
}

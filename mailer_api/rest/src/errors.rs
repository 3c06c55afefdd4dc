use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const SMTP_NOT_CONFIGURED: &str = "SMTP not configured";
pub const FAILED_TO_SEND_EMAIL: &str = "Failed to send email";
pub const NOT_FOUND: &str = "Not Found";

/// Log the error and answer with the generic send failure. The error detail
/// never leaves the server.
pub fn send_email_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("Send email error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, FAILED_TO_SEND_EMAIL)
}

pub fn error(code: StatusCode, error: &'static str) -> Response {
    (code, Json(ApiError { error })).into_response()
}

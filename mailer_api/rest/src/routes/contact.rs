use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use mailer_core_contact_contracts::{ContactSendMessageError, ContactService};
use tracing::{debug, error};

use crate::{
    errors::{
        self, send_email_error, FAILED_TO_SEND_EMAIL, METHOD_NOT_ALLOWED,
        MISSING_REQUIRED_FIELDS, NOT_FOUND, SMTP_NOT_CONFIGURED,
    },
    models::{contact::ApiContactSubmission, ApiOk},
};

pub fn router(service: Arc<impl ContactService>, path: &str) -> Router<()> {
    Router::new()
        .route(path, routing::any(contact))
        .fallback(not_found)
        .with_state(service)
}

async fn contact(
    service: State<Arc<impl ContactService>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::POST => match body {
            Ok(body) => send_message(&**service, &body).await,
            Err(err) => {
                debug!("failed to read contact form submission: {err}");
                errors::error(StatusCode::BAD_REQUEST, MISSING_REQUIRED_FIELDS)
            }
        },
        _ => errors::error(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED),
    }
}

async fn send_message(service: &impl ContactService, body: &[u8]) -> Response {
    let body: &[u8] = if body.is_empty() { b"{}" } else { body };

    let submission = match serde_json::from_slice::<ApiContactSubmission>(body) {
        Ok(submission) => submission,
        Err(err) => {
            debug!("rejected contact form submission: {err}");
            return errors::error(StatusCode::BAD_REQUEST, MISSING_REQUIRED_FIELDS);
        }
    };

    match service.send_message(submission.into()).await {
        Ok(()) => Json(ApiOk { ok: true }).into_response(),
        Err(ContactSendMessageError::NotConfigured) => {
            error!("SMTP credentials not configured");
            errors::error(StatusCode::INTERNAL_SERVER_ERROR, SMTP_NOT_CONFIGURED)
        }
        Err(ContactSendMessageError::Send) => {
            error!("Send email error: relay did not accept the message");
            errors::error(StatusCode::INTERNAL_SERVER_ERROR, FAILED_TO_SEND_EMAIL)
        }
        Err(ContactSendMessageError::Other(err)) => send_email_error(err),
    }
}

async fn not_found() -> Response {
    errors::error(StatusCode::NOT_FOUND, NOT_FOUND)
}

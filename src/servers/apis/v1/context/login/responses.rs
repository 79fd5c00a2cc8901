//! API responses for the [`login`](crate::servers::apis::v1::context::login) API context.
//!
//! Unlike the other contexts, error bodies use a `message` field.
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::resources::{Message, Session};
use crate::core::auth::{Error, SessionToken};

/// `200` response that contains the `Session` resource as json.
#[must_use]
pub fn session_response(session: SessionToken) -> Response {
    Json(Session::from(session)).into_response()
}

// Error responses

#[must_use]
pub fn login_error_response(err: &Error) -> Response {
    match err {
        Error::InvalidCredentials { .. } => message_response(StatusCode::UNAUTHORIZED, "Invalid credentials"),
        _ => {
            error!(target: "API", "Unable to issue a session token: {err}");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal error: unable to issue a session token")
        }
    }
}

#[must_use]
pub fn malformed_login_body_response(rejection: &JsonRejection) -> Response {
    message_response(
        StatusCode::BAD_REQUEST,
        &format!("Invalid request body: {}", rejection.body_text()),
    )
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(Message {
            message: message.to_owned(),
        }),
    )
        .into_response()
}

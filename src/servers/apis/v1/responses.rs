//! Common responses for the API v1 shared by all the contexts.
//!
//! Error responses are JSON objects with a single `error` field:
//!
//! ```json
//! {
//!     "error": "The model 1 was not found"
//! }
//! ```
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Response body used when requests have no data to return.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ActionStatus {
    pub status: String,
    pub message: String,
}

/// Error response body.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorMessage {
    pub error: String,
}

// OK response

#[must_use]
pub fn ok_response(status: &str, message: &str) -> Response {
    (
        StatusCode::OK,
        Json(ActionStatus {
            status: status.to_owned(),
            message: message.to_owned(),
        }),
    )
        .into_response()
}

// Error responses

#[must_use]
pub fn invalid_model_id_param_response(model_id: &str) -> Response {
    bad_request_response(&format!(
        "Invalid URL: invalid model id param: string \"{model_id}\", expected an integer"
    ))
}

/// `400` response when the request body is not the expected JSON document.
#[must_use]
pub fn malformed_body_response(rejection: &JsonRejection) -> Response {
    bad_request_response(&format!("Invalid request body: {}", rejection.body_text()))
}

#[must_use]
pub fn bad_request_response(message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

#[must_use]
pub fn not_found_response(message: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, message)
}

#[must_use]
pub fn conflict_response(message: &str) -> Response {
    error_response(StatusCode::CONFLICT, message)
}

/// `500` response. The message describes the failure without internal details
/// like the source code location.
#[must_use]
pub fn internal_server_error_response(message: &str) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

#[must_use]
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorMessage {
            error: message.to_owned(),
        }),
    )
        .into_response()
}

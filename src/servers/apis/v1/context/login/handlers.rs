//! API handlers for the [`login`](crate::servers::apis::v1::context::login) API context.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;

use super::forms::LoginForm;
use super::responses::{login_error_response, malformed_login_body_response, session_response};
use crate::core::auth::Authenticator;

/// It handles the admin login request.
///
/// It returns:
///
/// - `200` response with a json [`Session`](crate::servers::apis::v1::context::login::resources::Session).
/// - `400` response if the body is not a JSON object.
/// - `401` response if the credentials do not match the admin ones.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::login#login)
/// for more information about this endpoint.
pub async fn login_handler(
    State(authenticator): State<Arc<Authenticator>>,
    form: Result<Json<LoginForm>, JsonRejection>,
) -> Response {
    match form {
        Err(rejection) => malformed_login_body_response(&rejection),
        Ok(Json(form)) => match authenticator.login(&form.username, &form.password) {
            Ok(session) => session_response(session),
            Err(err) => login_error_response(&err),
        },
    }
}

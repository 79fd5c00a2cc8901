//! API routes for the [`login`](crate::servers::apis::v1::context::login) API context.
//!
//! - `POST /login`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::login).
use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::login_handler;
use crate::core::auth::Authenticator;

/// It adds the routes to the router for the [`login`](crate::servers::apis::v1::context::login) API context.
pub fn add(prefix: &str, router: Router, authenticator: Arc<Authenticator>) -> Router {
    router.route(&format!("{prefix}/login"), post(login_handler).with_state(authenticator))
}

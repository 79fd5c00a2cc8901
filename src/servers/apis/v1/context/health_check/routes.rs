//! API routes for the [`health_check`](crate::servers::apis::v1::context::health_check)
//! API context.
//!
//! - `GET /health`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::health_check).
use axum::routing::get;
use axum::Router;

use super::handlers::health_check_handler;

/// It adds the routes to the router for the [`health_check`](crate::servers::apis::v1::context::health_check) API context.
pub fn add(prefix: &str, router: Router) -> Router {
    router.route(&format!("{prefix}/health"), get(health_check_handler))
}

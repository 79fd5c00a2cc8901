//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::{health_check, login, model};
use crate::core::auth::Authenticator;
use crate::core::Registry;

/// Add the routes for the v1 API.
pub fn add(prefix: &str, router: Router, registry: Arc<Registry>, authenticator: Arc<Authenticator>) -> Router {
    let router = health_check::routes::add(prefix, router);
    let router = model::routes::add(prefix, router, registry);
    login::routes::add(prefix, router, authenticator)
}

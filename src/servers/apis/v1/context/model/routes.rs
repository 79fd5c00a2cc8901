//! API routes for the [`model`](crate::servers::apis::v1::context::model) API context.
//!
//! - `GET /modelos`
//! - `POST /modelos`
//! - `GET /modelos/{id}`
//! - `PUT /modelos/{id}`
//! - `DELETE /modelos/{id}`
//! - `POST /modelos/{id}/delete`
//! - `GET /secciones/{section}/modelos`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::model).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    add_model_handler, delete_model_handler, get_model_handler, get_models_handler, get_section_models_handler,
    update_model_handler,
};
use crate::core::Registry;

/// It adds the routes to the router for the [`model`](crate::servers::apis::v1::context::model) API context.
pub fn add(prefix: &str, router: Router, registry: Arc<Registry>) -> Router {
    router
        .route(
            &format!("{prefix}/modelos"),
            get(get_models_handler)
                .post(add_model_handler)
                .with_state(registry.clone()),
        )
        .route(
            &format!("{prefix}/modelos/{{id}}"),
            get(get_model_handler)
                .put(update_model_handler)
                .delete(delete_model_handler)
                .with_state(registry.clone()),
        )
        // For clients that can not send `DELETE` requests.
        .route(
            &format!("{prefix}/modelos/{{id}}/delete"),
            post(delete_model_handler).with_state(registry.clone()),
        )
        .route(
            &format!("{prefix}/secciones/{{section}}/modelos"),
            get(get_section_models_handler).with_state(registry),
        )
}

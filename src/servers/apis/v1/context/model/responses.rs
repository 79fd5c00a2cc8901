//! API responses for the [`model`](crate::servers::apis::v1::context::model) API context.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::resources::ModelResource;
use crate::core::error::Error;
use crate::core::model::{Model, ModelId};
use crate::servers::apis::v1::responses::{
    bad_request_response, conflict_response, internal_server_error_response, not_found_response, ok_response,
};

/// `200` response that contains the `ModelResource` as json.
#[must_use]
pub fn model_response(model: Model) -> Response {
    Json(ModelResource::from(model)).into_response()
}

/// `200` response that contains an array of `ModelResource` as json.
#[must_use]
pub fn model_list_response(models: Vec<Model>) -> Response {
    Json(models.into_iter().map(ModelResource::from).collect::<Vec<_>>()).into_response()
}

/// `201` response that contains the new `ModelResource` as json.
#[must_use]
pub fn created_model_response(model: Model) -> Response {
    (StatusCode::CREATED, Json(ModelResource::from(model))).into_response()
}

#[must_use]
pub fn deleted_model_response(id: ModelId) -> Response {
    ok_response("deleted", &format!("Model {id} deleted"))
}

// Error responses

/// It maps a [`Registry`](crate::core::Registry) error to its error response.
///
/// Status | Error
/// ---|---
/// `400` | `MissingField`, `InvalidDate`
/// `404` | `ModelNotFound`
/// `409` | `DuplicateModel`
/// `500` | `Database`
#[must_use]
pub fn registry_error_response(err: &Error) -> Response {
    match err {
        Error::MissingField { field, .. } => bad_request_response(&format!("Missing required field: {field}")),
        Error::InvalidDate { date, .. } => bad_request_response(&format!("Invalid date \"{date}\", expected YYYY-MM-DD")),
        Error::ModelNotFound { id, .. } => not_found_response(&format!("Model {id} not found")),
        Error::DuplicateModel { .. } => conflict_response(&err.to_string()),
        Error::Database { source } => {
            error!(target: "API", "Record store failure: {source}");
            internal_server_error_response("Internal error: unable to access the record store")
        }
    }
}

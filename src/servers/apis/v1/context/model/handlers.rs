//! API handlers for the [`model`](crate::servers::apis::v1::context::model) API context.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use super::forms::{CreateModelForm, UpdateModelForm};
use super::responses::{
    created_model_response, deleted_model_response, model_list_response, model_response, registry_error_response,
};
use crate::core::model::ModelId;
use crate::core::Registry;
use crate::servers::apis::v1::responses::{invalid_model_id_param_response, malformed_body_response};
use crate::servers::apis::ModelIdParam;

/// It handles the request to list all the models, the most recent first.
///
/// It returns:
///
/// - `200` response with a json array of [`ModelResource`](crate::servers::apis::v1::context::model::resources::ModelResource).
/// - `500` response if the record store fails.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::model#list-models)
/// for more information about this endpoint.
pub async fn get_models_handler(State(registry): State<Arc<Registry>>) -> Response {
    match registry.list_all() {
        Ok(models) => model_list_response(models),
        Err(err) => registry_error_response(&err),
    }
}

/// It handles the request to list the models of one section.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::model#list-the-models-of-a-section)
/// for more information about this endpoint.
pub async fn get_section_models_handler(State(registry): State<Arc<Registry>>, Path(section): Path<String>) -> Response {
    match registry.list_by_section(&section) {
        Ok(models) => model_list_response(models),
        Err(err) => registry_error_response(&err),
    }
}

/// It handles the request to get one model.
///
/// It returns:
///
/// - `200` response with a json [`ModelResource`](crate::servers::apis::v1::context::model::resources::ModelResource).
/// - `400` response if the `id` is not an integer.
/// - `404` response if the model does not exist.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::model#get-a-model)
/// for more information about this endpoint.
pub async fn get_model_handler(State(registry): State<Arc<Registry>>, Path(id): Path<ModelIdParam>) -> Response {
    match parse_model_id(&id) {
        Err(response) => response,
        Ok(id) => match registry.get(id) {
            Ok(model) => model_response(model),
            Err(err) => registry_error_response(&err),
        },
    }
}

/// It handles the request to create a new model.
///
/// It returns:
///
/// - `201` response with the new json [`ModelResource`](crate::servers::apis::v1::context::model::resources::ModelResource).
/// - `400` response if a required field is missing, the date is not valid
///   or the body is not a JSON object.
/// - `409` response if the section already contains a model with that name.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::model#create-a-model)
/// for more information about this endpoint.
pub async fn add_model_handler(
    State(registry): State<Arc<Registry>>,
    form: Result<Json<CreateModelForm>, JsonRejection>,
) -> Response {
    match form {
        Err(rejection) => malformed_body_response(&rejection),
        Ok(Json(form)) => match registry.create(form.into()) {
            Ok(model) => created_model_response(model),
            Err(err) => registry_error_response(&err),
        },
    }
}

/// It handles the request to update some fields of a model.
///
/// It returns:
///
/// - `200` response with the updated json [`ModelResource`](crate::servers::apis::v1::context::model::resources::ModelResource).
/// - `400` response if the `id` is not an integer, the date is not valid or
///   the body is not a JSON object.
/// - `404` response if the model does not exist.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::model#update-a-model)
/// for more information about this endpoint.
pub async fn update_model_handler(
    State(registry): State<Arc<Registry>>,
    Path(id): Path<ModelIdParam>,
    form: Result<Json<UpdateModelForm>, JsonRejection>,
) -> Response {
    let id = match parse_model_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match form {
        Err(rejection) => malformed_body_response(&rejection),
        Ok(Json(form)) => match registry.update(id, form.into()) {
            Ok(model) => model_response(model),
            Err(err) => registry_error_response(&err),
        },
    }
}

/// It handles the request to delete a model. It's used by both the
/// `DELETE /modelos/{id}` and the `POST /modelos/{id}/delete` routes.
///
/// It returns:
///
/// - `200` response with a json [`ActionStatus`](crate::servers::apis::v1::responses::ActionStatus).
/// - `400` response if the `id` is not an integer.
/// - `404` response if the model does not exist.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::model#delete-a-model)
/// for more information about this endpoint.
pub async fn delete_model_handler(State(registry): State<Arc<Registry>>, Path(id): Path<ModelIdParam>) -> Response {
    match parse_model_id(&id) {
        Err(response) => response,
        Ok(id) => match registry.delete(id) {
            Ok(()) => deleted_model_response(id),
            Err(err) => registry_error_response(&err),
        },
    }
}

fn parse_model_id(param: &ModelIdParam) -> Result<ModelId, Response> {
    param
        .0
        .parse::<ModelId>()
        .map_err(|_| invalid_model_id_param_response(&param.0))
}

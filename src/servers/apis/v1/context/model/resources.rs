//! API resources for the [`model`](crate::servers::apis::v1::context::model) API context.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::model::{Model, ModelId};

/// A model record as returned by the API.
///
/// `nombre` mirrors `modelo` for older clients.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ModelResource {
    pub id: ModelId,
    pub seccion: String,
    pub modelo: String,
    pub cliente: String,
    pub fecha: String,
    pub ficha_json: Value,
    pub nombre: String,
}

impl From<Model> for ModelResource {
    fn from(model: Model) -> Self {
        ModelResource {
            id: model.id,
            seccion: model.section,
            nombre: model.model_name.clone(),
            modelo: model.model_name,
            cliente: model.client,
            fecha: model.date,
            ficha_json: model.form_data.to_json_value(),
        }
    }
}

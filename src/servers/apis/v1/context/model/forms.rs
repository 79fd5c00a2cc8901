//! API forms for the [`model`](crate::servers::apis::v1::context::model) API context.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::model::{CreateModel, FormData, ModelUpdate};

/// Request body to create a model.
///
/// `nombre` is accepted as an alias of `modelo` for older clients. It's only
/// used when `modelo` is missing or blank. `null` values are treated as
/// omitted fields.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct CreateModelForm {
    pub seccion: Option<String>,
    pub modelo: Option<String>,
    pub nombre: Option<String>,
    pub cliente: Option<String>,
    pub fecha: Option<String>,
    pub ficha_json: Option<Value>,
}

impl From<CreateModelForm> for CreateModel {
    fn from(form: CreateModelForm) -> Self {
        let model_name = form
            .modelo
            .filter(|modelo| !modelo.trim().is_empty())
            .or(form.nombre)
            .unwrap_or_default();

        CreateModel {
            section: form.seccion.unwrap_or_default(),
            model_name,
            client: form.cliente,
            date: form.fecha,
            form_data: form.ficha_json.map(FormData::from_input),
        }
    }
}

/// Request body to update a model. Only the supplied fields change.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct UpdateModelForm {
    pub cliente: Option<String>,
    pub fecha: Option<String>,
    pub ficha_json: Option<Value>,
}

impl From<UpdateModelForm> for ModelUpdate {
    fn from(form: UpdateModelForm) -> Self {
        ModelUpdate {
            client: form.cliente,
            date: form.fecha,
            form_data: form.ficha_json.map(FormData::from_input),
        }
    }
}

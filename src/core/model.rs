//! The model record: the only entity persisted by the API.
//!
//! Field         | Sample data                  | Description
//! ---|---|---
//! `id`          | 1                            | Autoincrement id, never reused
//! `section`     | `Calzado`                    | Grouping category. Exact, case-sensitive match
//! `model_name`  | `Bota Trekking`              | Model name. Unique within its section
//! `client`      | `ACME`                       | Optional client, empty by default
//! `date`        | `2024-05-10`                 | Calendar date (`YYYY-MM-DD`), today by default
//! `form_data`   | `{"talla": 42}`              | Free-form JSON document, `{}` by default
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// The store-assigned identifier of a model.
pub type ModelId = i64;

/// Format used to store and display the model date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A model as persisted in the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub id: ModelId,
    pub section: String,
    pub model_name: String,
    pub client: String,
    pub date: String,
    pub form_data: FormData,
}

/// A model ready to be inserted. Defaults have already been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModel {
    pub section: String,
    pub model_name: String,
    pub client: String,
    pub date: String,
    pub form_data: FormData,
}

/// The request to create a new model, as received by the
/// [`Registry`](crate::core::Registry). Optional values get their default
/// when the model is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateModel {
    pub section: String,
    pub model_name: String,
    pub client: Option<String>,
    pub date: Option<String>,
    pub form_data: Option<FormData>,
}

/// A partial update. `None` leaves the field unchanged, `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelUpdate {
    pub client: Option<String>,
    pub date: Option<String>,
    pub form_data: Option<FormData>,
}

impl ModelUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.client.is_none() && self.date.is_none() && self.form_data.is_none()
    }
}

/// The JSON form attached to a model.
///
/// Form data sent as text is parsed as JSON. When the text is not valid JSON
/// it is kept as it is (`Raw`) instead of rejecting the request. A raw form is
/// exposed and stored as `{"raw": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormData {
    Parsed(Value),
    Raw(String),
}

impl Default for FormData {
    fn default() -> Self {
        Self::Parsed(Value::Object(Map::new()))
    }
}

impl FormData {
    /// It parses the text as JSON falling back to a `Raw` form.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::Parsed(value),
            Err(_) => Self::Raw(text.to_owned()),
        }
    }

    /// It builds the form from the JSON value received in a request body.
    ///
    /// Structured values are kept verbatim. JSON strings are treated as text
    /// that could contain a serialized JSON document.
    #[must_use]
    pub fn from_input(value: Value) -> Self {
        match value {
            Value::String(text) => Self::from_text(&text),
            value => Self::Parsed(value),
        }
    }

    /// It rebuilds the form from the text kept in the record store.
    ///
    /// A stored `{"raw": "<text>"}` object is read back as a `Raw` form.
    #[must_use]
    pub fn from_stored(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => {
                if map.len() == 1 {
                    if let Some(Value::String(raw)) = map.get("raw") {
                        return Self::Raw(raw.clone());
                    }
                }
                Self::Parsed(Value::Object(map))
            }
            Ok(value) => Self::Parsed(value),
            Err(_) => Self::Raw(text.to_owned()),
        }
    }

    #[must_use]
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    /// The JSON representation of the form.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            Self::Parsed(value) => value.clone(),
            Self::Raw(text) => json!({ "raw": text }),
        }
    }

    /// The text kept in the record store.
    #[must_use]
    pub fn to_stored(&self) -> String {
        self.to_json_value().to_string()
    }
}

impl Serialize for FormData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Parsed(value) => value.serialize(serializer),
            Self::Raw(_) => self.to_json_value().serialize(serializer),
        }
    }
}

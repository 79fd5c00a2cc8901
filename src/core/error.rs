//! Errors returned by the core [`Registry`](crate::core::Registry).
//!
//! Error | Context | Description
//! ---|---|---
//! `MissingField` | Validation | A required field (`seccion` or `modelo`) is missing or blank.
//! `InvalidDate` | Validation | The date is not a `YYYY-MM-DD` calendar date.
//! `ModelNotFound` | Lookup | There is no model with the requested `id`.
//! `DuplicateModel` | Persistence | The `(seccion, modelo)` pair is already registered.
//! `Database` | Persistence | The record store failed.
use std::panic::Location;

use super::databases;
use super::model::ModelId;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    // Validation errors
    #[error("The field `{field}` is required, {location}")]
    MissingField {
        field: &'static str,
        location: &'static Location<'static>,
    },
    #[error("The date `{date}` is not a valid `YYYY-MM-DD` date, {location}")]
    InvalidDate {
        date: String,
        location: &'static Location<'static>,
    },

    // Lookup errors
    #[error("The model {id} was not found, {location}")]
    ModelNotFound {
        id: ModelId,
        location: &'static Location<'static>,
    },

    // Persistence errors
    #[error("The model `{model_name}` already exists in the section `{section}`")]
    DuplicateModel { section: String, model_name: String },
    #[error("The record store failed: {source}")]
    Database { source: databases::error::Error },
}

impl From<databases::error::Error> for Error {
    fn from(source: databases::error::Error) -> Self {
        Self::Database { source }
    }
}

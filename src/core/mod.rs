//! The `core` module contains the model registry logic which is independent of the delivery layer.
//!
//! It contains the [`Registry`] service and its dependencies. It's a domain layer which does not
//! specify how the end user should connect to the `Registry`. The only delivery layer is the
//! [REST API](crate::servers::apis).
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!  Modelos REST API |> Registry |> Record store (SQLite3 | MySQL)
//! ```
//!
//! # Table of contents
//!
//! - [Registry](#registry)
//! - [Models](#models)
//! - [Authentication](#authentication)
//! - [Persistence](#persistence)
//!
//! # Registry
//!
//! The `Registry` is the main struct in this module. It keeps the catalogue of
//! [models](crate::core::model::Model). It validates the requests, applies the
//! default values and delegates the persistence to the configured record store.
//!
//! There is no cache: every read goes to the store and every write is committed
//! immediately.
//!
//! ```rust,no_run
//! use modelos_api::core::model::CreateModel;
//! use modelos_api::core::Registry;
//! use modelos_api_configuration::Configuration;
//!
//! let registry = Registry::new(&Configuration::default()).unwrap();
//!
//! let model = registry
//!     .create(CreateModel {
//!         section: "Calzado".to_string(),
//!         model_name: "Bota Trekking".to_string(),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! assert_eq!(registry.get(model.id).unwrap(), model);
//! ```
//!
//! # Models
//!
//! Refer to the [`model`] module for the record fields and their defaults.
//!
//! The pair `(section, model_name)` is unique. The store enforces it, so two
//! concurrent creations of the same pair can not both succeed.
//!
//! # Authentication
//!
//! Refer to the [`auth`] module. The admin login issues a session token, which
//! is not required by any registry operation.
//!
//! # Persistence
//!
//! Refer to the [`databases`] module.
pub mod auth;
pub mod databases;
pub mod error;
pub mod model;

use std::panic::Location;
use std::sync::Arc;

use chrono::NaiveDate;
use modelos_api_clock::clock::Time;
use modelos_api_clock::conv::convert_from_timestamp_to_local_date;
use modelos_api_configuration::Configuration;
use tracing::warn;

use self::databases::Database;
use self::error::Error;
use self::model::{CreateModel, FormData, Model, ModelId, ModelUpdate, NewModel, DATE_FORMAT};
use crate::CurrentClock;

/// The domain layer service.
///
/// It's the only way to read or write models.
pub struct Registry {
    /// A database driver implementation: [`Sqlite3`](crate::core::databases::sqlite)
    /// or [`MySQL`](crate::core::databases::mysql)
    pub database: Arc<Box<dyn Database>>,
}

impl Registry {
    /// `Registry` constructor. It builds the record store driver and creates
    /// the schema when missing.
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if unable to connect to database.
    pub fn new(config: &Configuration) -> Result<Registry, databases::error::Error> {
        let database = Arc::new(databases::driver::build(&config.database.driver, &config.database.path)?);

        Ok(Registry { database })
    }

    /// It returns all the models, the most recent first.
    ///
    /// # Errors
    ///
    /// Will return an `Error::Database` if the store fails.
    pub fn list_all(&self) -> Result<Vec<Model>, Error> {
        Ok(self.database.load_models()?)
    }

    /// It returns the models of a section, the most recent first.
    ///
    /// # Errors
    ///
    /// Will return an `Error::Database` if the store fails.
    pub fn list_by_section(&self, section: &str) -> Result<Vec<Model>, Error> {
        Ok(self.database.load_models_by_section(section)?)
    }

    /// # Errors
    ///
    /// Will return an `Error::ModelNotFound` if there is no model with that `id`.
    pub fn get(&self, id: ModelId) -> Result<Model, Error> {
        self.database.get_model(id)?.ok_or(Error::ModelNotFound {
            id,
            location: Location::caller(),
        })
    }

    /// It registers a new model.
    ///
    /// The section and the model name are trimmed. A missing date defaults to
    /// the current date of the server, in its local time zone. A missing client
    /// defaults to `""` and a missing form to `{}`.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - `Error::MissingField` if the section or the model name are blank.
    /// - `Error::InvalidDate` if the date is not a `YYYY-MM-DD` date.
    /// - `Error::DuplicateModel` if the section already contains a model with that name.
    pub fn create(&self, request: CreateModel) -> Result<Model, Error> {
        let section = required(&request.section, "seccion")?;
        let model_name = required(&request.model_name, "modelo")?;

        let date = match request.date.filter(|date| !date.trim().is_empty()) {
            Some(date) => validated_date(date)?,
            None => today(),
        };

        let form_data = request.form_data.unwrap_or_default();

        if form_data.is_raw() {
            warn!("Storing the form of the new model `{model_name}` as raw text, it is not valid JSON");
        }

        let new_model = NewModel {
            section,
            model_name,
            client: request.client.unwrap_or_default(),
            date,
            form_data,
        };

        self.database.insert_model(&new_model).map_err(|err| {
            if err.is_unique_constraint_violation() {
                Error::DuplicateModel {
                    section: new_model.section.clone(),
                    model_name: new_model.model_name.clone(),
                }
            } else {
                err.into()
            }
        })
    }

    /// It updates the supplied fields of a model. Omitted fields are left
    /// unchanged and an empty string clears the field.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - `Error::InvalidDate` if the new date is neither empty nor a `YYYY-MM-DD` date.
    /// - `Error::ModelNotFound` if there is no model with that `id`.
    pub fn update(&self, id: ModelId, update: ModelUpdate) -> Result<Model, Error> {
        let update = ModelUpdate {
            date: match update.date {
                Some(date) if date.trim().is_empty() => Some(String::new()),
                Some(date) => Some(validated_date(date)?),
                None => None,
            },
            ..update
        };

        if update.form_data.as_ref().is_some_and(FormData::is_raw) {
            warn!("Storing the form of the model {id} as raw text, it is not valid JSON");
        }

        if update.is_empty() {
            return self.get(id);
        }

        self.database.update_model(id, &update)?.ok_or(Error::ModelNotFound {
            id,
            location: Location::caller(),
        })
    }

    /// It removes a model. The `id` is never reused.
    ///
    /// # Errors
    ///
    /// Will return an `Error::ModelNotFound` if there is no model with that `id`.
    pub fn delete(&self, id: ModelId) -> Result<(), Error> {
        match self.database.delete_model(id)? {
            0 => Err(Error::ModelNotFound {
                id,
                location: Location::caller(),
            }),
            _ => Ok(()),
        }
    }

    /// It drops the database tables. Any later operation fails with a store error.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    pub fn drop_database_tables(&self) -> Result<(), databases::error::Error> {
        self.database.drop_database_tables()
    }
}

#[track_caller]
fn required(value: &str, field: &'static str) -> Result<String, Error> {
    let value = value.trim();

    if value.is_empty() {
        return Err(Error::MissingField {
            field,
            location: Location::caller(),
        });
    }

    Ok(value.to_string())
}

#[track_caller]
fn validated_date(date: String) -> Result<String, Error> {
    let trimmed = date.trim();

    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(parsed) => Ok(parsed.format(DATE_FORMAT).to_string()),
        Err(_) => Err(Error::InvalidDate {
            date,
            location: Location::caller(),
        }),
    }
}

fn today() -> String {
    convert_from_timestamp_to_local_date(CurrentClock::now())
        .format(DATE_FORMAT)
        .to_string()
}

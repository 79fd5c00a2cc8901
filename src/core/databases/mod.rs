//! The persistence module.
//!
//! Persistence is currently implemented with one [`Database`] trait.
//!
//! There are two implementations of the trait (two drivers):
//!
//! - [`Mysql`](crate::core::databases::mysql::Mysql)
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite)
//!
//! > **NOTICE**: There are no database migrations. If there are any changes,
//! > we will implement them or provide a script to migrate to the new schema.
//!
//! The only persistent object is the [model record](crate::core::model).
//!
//! # Models
//!
//!  Field        | Sample data       | Description
//! ---|---|---
//!  `id`         | 1                 | Autoincrement id
//!  `seccion`    | `Calzado`         | Section. Unique together with `modelo`
//!  `modelo`     | `Bota Trekking`   | Model name
//!  `cliente`    | `ACME`            | Client, empty string when unknown
//!  `fecha`      | `2024-05-10`      | Date in `YYYY-MM-DD` format
//!  `ficha_json` | `{"talla":42}`    | Serialized JSON form
//!
//! Every driver owns a connection pool. Each operation takes a connection
//! from the pool and gives it back when the operation finishes, whatever the
//! result. Operations with more than one statement run inside a transaction.
pub mod driver;
pub mod error;
pub mod mysql;
pub mod sqlite;

use std::marker::PhantomData;

use self::error::Error;
use crate::core::model::{Model, ModelId, ModelUpdate, NewModel};

struct Builder<T>
where
    T: Database,
{
    phantom: PhantomData<T>,
}

impl<T> Builder<T>
where
    T: Database + 'static,
{
    /// .
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    pub(self) fn build(db_path: &str) -> Result<Box<dyn Database>, Error> {
        Ok(Box::new(T::new(db_path)?))
    }
}

/// The persistence trait. It contains all the methods to interact with the database.
pub trait Database: Sync + Send {
    /// It instantiates a new database driver.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    fn new(db_path: &str) -> Result<Self, Error>
    where
        Self: std::marker::Sized;

    // Schema

    /// It generates the database tables. SQL queries are hardcoded in the trait
    /// implementation.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to create own tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It drops the database tables.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    fn drop_database_tables(&self) -> Result<(), Error>;

    // Models

    /// It loads all the models, the most recent first (descending `id`).
    ///
    /// # Context: Models
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_models(&self) -> Result<Vec<Model>, Error>;

    /// It loads the models of one section, the most recent first.
    ///
    /// The section must match exactly, including letter case.
    ///
    /// # Context: Models
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_models_by_section(&self, section: &str) -> Result<Vec<Model>, Error>;

    /// It gets a model by its `id`.
    ///
    /// It returns `Some(Model)` if the model exists, `None` otherwise.
    ///
    /// # Context: Models
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_model(&self, id: ModelId) -> Result<Option<Model>, Error>;

    /// It inserts a new model and returns it with the assigned `id`.
    ///
    /// # Context: Models
    ///
    /// # Errors
    ///
    /// Will return [`Error::UniqueConstraintViolation`] if there is already a
    /// model with the same section and name. Any other `Err` if unable to save.
    fn insert_model(&self, model: &NewModel) -> Result<Model, Error>;

    /// It updates the supplied fields of a model in a single transaction.
    ///
    /// It returns the updated model, or `None` if the model does not exist.
    ///
    /// # Context: Models
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save. No field is updated in that case.
    fn update_model(&self, id: ModelId, update: &ModelUpdate) -> Result<Option<Model>, Error>;

    /// It deletes a model and returns the number of removed records.
    ///
    /// # Context: Models
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to delete.
    fn delete_model(&self, id: ModelId) -> Result<usize, Error>;
}

//! The `MySQL` database driver.
use std::panic::Location;

use modelos_api_configuration::Driver;
use r2d2::Pool;
use r2d2_mysql::mysql::prelude::Queryable;
use r2d2_mysql::mysql::{params, Opts, OptsBuilder, TxOpts};
use r2d2_mysql::MySqlConnectionManager;

use super::{Database, Error};
use crate::core::model::{FormData, Model, ModelId, ModelUpdate, NewModel};

const DRIVER: Driver = Driver::MySQL;

const SELECT_MODELS: &str = "SELECT id, seccion, modelo, cliente, fecha, ficha_json FROM modelos";

/// `seccion` and `modelo` use a binary collation so that the unique
/// constraint and the section filter are case-sensitive. `ficha_json` holds
/// forms up to 16 MiB.
const CREATE_MODELS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS `modelos` (
  `id` BIGINT NOT NULL AUTO_INCREMENT,
  `seccion` VARCHAR(191) COLLATE utf8mb4_bin NOT NULL,
  `modelo` VARCHAR(191) COLLATE utf8mb4_bin NOT NULL,
  `cliente` TEXT NOT NULL,
  `fecha` VARCHAR(10) NOT NULL,
  `ficha_json` MEDIUMTEXT NOT NULL,
  PRIMARY KEY (`id`),
  UNIQUE (`seccion`, `modelo`)
) DEFAULT CHARSET = utf8mb4;";

type ModelRow = (ModelId, String, String, String, String, String);

pub struct Mysql {
    pool: Pool<MySqlConnectionManager>,
}

impl Database for Mysql {
    /// It instantiates a new `MySQL` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `MySQL` database.
    fn new(db_path: &str) -> Result<Self, Error> {
        let opts = Opts::from_url(db_path)?;
        let builder = OptsBuilder::from_opts(opts);
        let manager = MySqlConnectionManager::new(builder);
        let pool = r2d2::Pool::builder().build(manager).map_err(|e| (e, DRIVER))?;

        Ok(Self { pool })
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(CREATE_MODELS_TABLE)?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_models_table = "
        DROP TABLE `modelos`;"
            .to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&drop_models_table)?;

        Ok(())
    }

    /// Refer to [`databases::Database::load_models`](crate::core::databases::Database::load_models).
    fn load_models(&self) -> Result<Vec<Model>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let models = conn.query_map(format!("{SELECT_MODELS} ORDER BY id DESC"), model_from_row)?;

        Ok(models)
    }

    /// Refer to [`databases::Database::load_models_by_section`](crate::core::databases::Database::load_models_by_section).
    fn load_models_by_section(&self, section: &str) -> Result<Vec<Model>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let models = conn.exec_map(
            format!("{SELECT_MODELS} WHERE seccion = :section ORDER BY id DESC"),
            params! { section },
            model_from_row,
        )?;

        Ok(models)
    }

    /// Refer to [`databases::Database::get_model`](crate::core::databases::Database::get_model).
    fn get_model(&self, id: ModelId) -> Result<Option<Model>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let row = conn.exec_first::<ModelRow, _, _>(format!("{SELECT_MODELS} WHERE id = :id"), params! { id })?;

        Ok(row.map(model_from_row))
    }

    /// Refer to [`databases::Database::insert_model`](crate::core::databases::Database::insert_model).
    fn insert_model(&self, model: &NewModel) -> Result<Model, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let section = model.section.as_str();
        let model_name = model.model_name.as_str();
        let client = model.client.as_str();
        let date = model.date.as_str();
        let form_data = model.form_data.to_stored();

        conn.exec_drop(
            "INSERT INTO modelos (seccion, modelo, cliente, fecha, ficha_json) VALUES (:section, :model_name, :client, :date, :form_data)",
            params! { section, model_name, client, date, form_data },
        )?;

        let id = ModelId::try_from(conn.last_insert_id()).map_err(|_| Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })?;

        let row = conn.exec_first::<ModelRow, _, _>(format!("{SELECT_MODELS} WHERE id = :id"), params! { id })?;

        row.map(model_from_row).ok_or(Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::update_model`](crate::core::databases::Database::update_model).
    fn update_model(&self, id: ModelId, update: &ModelUpdate) -> Result<Option<Model>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        // Dropping the transaction without committing rolls it back.
        let mut tx = conn.start_transaction(TxOpts::default())?;

        let locked = tx.exec_first::<ModelId, _, _>("SELECT id FROM modelos WHERE id = :id FOR UPDATE", params! { id })?;

        if locked.is_none() {
            return Ok(None);
        }

        if let Some(client) = &update.client {
            tx.exec_drop("UPDATE modelos SET cliente = :client WHERE id = :id", params! { client, id })?;
        }

        if let Some(date) = &update.date {
            tx.exec_drop("UPDATE modelos SET fecha = :date WHERE id = :id", params! { date, id })?;
        }

        if let Some(form_data) = &update.form_data {
            let form_data = form_data.to_stored();
            tx.exec_drop(
                "UPDATE modelos SET ficha_json = :form_data WHERE id = :id",
                params! { form_data, id },
            )?;
        }

        let row = tx.exec_first::<ModelRow, _, _>(format!("{SELECT_MODELS} WHERE id = :id"), params! { id })?;

        tx.commit()?;

        Ok(row.map(model_from_row))
    }

    /// Refer to [`databases::Database::delete_model`](crate::core::databases::Database::delete_model).
    fn delete_model(&self, id: ModelId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop("DELETE FROM modelos WHERE id = :id", params! { id })?;

        Ok(usize::try_from(conn.affected_rows()).unwrap_or(usize::MAX))
    }
}

fn model_from_row((id, section, model_name, client, date, form_data): ModelRow) -> Model {
    Model {
        id,
        section,
        model_name,
        client,
        date,
        form_data: FormData::from_stored(&form_data),
    }
}

//! The `SQLite3` database driver.
use std::fs;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use modelos_api_configuration::Driver;
use r2d2::Pool;
use r2d2_sqlite::rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use r2d2_sqlite::SqliteConnectionManager;

use super::{Database, Error};
use crate::core::model::{FormData, Model, ModelId, ModelUpdate, NewModel};

const DRIVER: Driver = Driver::Sqlite3;

/// Time a connection waits for a lock held by another connection.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SELECT_MODELS: &str = "SELECT id, seccion, modelo, cliente, fecha, ficha_json FROM modelos";

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

impl Database for Sqlite {
    /// It instantiates a new `SQLite3` database driver.
    ///
    /// The directory containing the database file is created when missing.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `SqLite` database.
    fn new(db_path: &str) -> Result<Sqlite, Error> {
        if let Some(directory) = Path::new(db_path).parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(directory).map_err(|err| Error::UnableToCreateDirectory {
                path: directory.display().to_string(),
                source: Arc::new(err),
                driver: DRIVER,
            })?;
        }

        let cm = SqliteConnectionManager::file(db_path).with_init(|conn| conn.busy_timeout(BUSY_TIMEOUT));
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_models_table = "
        CREATE TABLE IF NOT EXISTS modelos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            seccion TEXT NOT NULL,
            modelo TEXT NOT NULL,
            cliente TEXT NOT NULL DEFAULT '',
            fecha TEXT NOT NULL,
            ficha_json TEXT NOT NULL DEFAULT '{}',
            UNIQUE (seccion, modelo)
        );"
        .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&create_models_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_models_table = "
        DROP TABLE modelos;"
            .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&drop_models_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::load_models`](crate::core::databases::Database::load_models).
    fn load_models(&self) -> Result<Vec<Model>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(&format!("{SELECT_MODELS} ORDER BY id DESC"))?;

        let models = stmt.query_map([], model_from_row)?.collect::<Result<Vec<Model>, _>>()?;

        Ok(models)
    }

    /// Refer to [`databases::Database::load_models_by_section`](crate::core::databases::Database::load_models_by_section).
    fn load_models_by_section(&self, section: &str) -> Result<Vec<Model>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(&format!("{SELECT_MODELS} WHERE seccion = ?1 ORDER BY id DESC"))?;

        let models = stmt
            .query_map([section], model_from_row)?
            .collect::<Result<Vec<Model>, _>>()?;

        Ok(models)
    }

    /// Refer to [`databases::Database::get_model`](crate::core::databases::Database::get_model).
    fn get_model(&self, id: ModelId) -> Result<Option<Model>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(select_model(&conn, id)?)
    }

    /// Refer to [`databases::Database::insert_model`](crate::core::databases::Database::insert_model).
    fn insert_model(&self, model: &NewModel) -> Result<Model, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO modelos (seccion, modelo, cliente, fecha, ficha_json) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                model.section,
                model.model_name,
                model.client,
                model.date,
                model.form_data.to_stored()
            ],
        )?;

        if insert == 0 {
            return Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            });
        }

        select_model(&conn, conn.last_insert_rowid())?.ok_or(Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::update_model`](crate::core::databases::Database::update_model).
    fn update_model(&self, id: ModelId, update: &ModelUpdate) -> Result<Option<Model>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        // The write lock is taken up front so concurrent updates wait on the
        // busy timeout. Dropping the transaction without committing rolls it back.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists = tx
            .query_row("SELECT id FROM modelos WHERE id = ?1", [id], |row| row.get::<_, ModelId>(0))
            .optional()?
            .is_some();

        if !exists {
            return Ok(None);
        }

        if let Some(client) = &update.client {
            tx.execute("UPDATE modelos SET cliente = ?1 WHERE id = ?2", params![client, id])?;
        }

        if let Some(date) = &update.date {
            tx.execute("UPDATE modelos SET fecha = ?1 WHERE id = ?2", params![date, id])?;
        }

        if let Some(form_data) = &update.form_data {
            tx.execute(
                "UPDATE modelos SET ficha_json = ?1 WHERE id = ?2",
                params![form_data.to_stored(), id],
            )?;
        }

        let model = select_model(&tx, id)?;

        tx.commit()?;

        Ok(model)
    }

    /// Refer to [`databases::Database::delete_model`](crate::core::databases::Database::delete_model).
    fn delete_model(&self, id: ModelId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let deleted = conn.execute("DELETE FROM modelos WHERE id = ?1", [id])?;

        Ok(deleted)
    }
}

fn select_model(conn: &Connection, id: ModelId) -> Result<Option<Model>, r2d2_sqlite::rusqlite::Error> {
    conn.query_row(&format!("{SELECT_MODELS} WHERE id = ?1"), [id], model_from_row)
        .optional()
}

fn model_from_row(row: &Row<'_>) -> Result<Model, r2d2_sqlite::rusqlite::Error> {
    let form_data: String = row.get(5)?;

    Ok(Model {
        id: row.get(0)?,
        section: row.get(1)?,
        model_name: row.get(2)?,
        client: row.get(3)?,
        date: row.get(4)?,
        form_data: FormData::from_stored(&form_data),
    })
}

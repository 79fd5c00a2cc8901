//! Database errors.
//!
//! This module contains the [Database errors](crate::core::databases::error::Error).
use std::panic::Location;
use std::sync::Arc;

use modelos_api_configuration::Driver;
use r2d2_mysql::mysql::UrlError;
use r2d2_sqlite::rusqlite::ffi;

pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

/// `MySQL` server error code for `ER_DUP_ENTRY`.
const MYSQL_DUPLICATE_ENTRY: u16 = 1062;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The query unexpectedly returned nothing.
    #[error("The {driver} query unexpectedly returned nothing: {source}, {location}")]
    QueryReturnedNoRows {
        source: DynError,
        driver: Driver,
        location: &'static Location<'static>,
    },

    /// The query was malformed.
    #[error("The {driver} query was malformed: {source}, {location}")]
    InvalidQuery {
        source: DynError,
        driver: Driver,
        location: &'static Location<'static>,
    },

    /// The record breaks the unique `(seccion, modelo)` constraint.
    #[error("The {driver} record breaks a unique constraint: {source}, {location}")]
    UniqueConstraintViolation {
        source: DynError,
        driver: Driver,
        location: &'static Location<'static>,
    },

    /// Unable to insert a record into the database
    #[error("Unable to insert record into {driver} database, {location}")]
    InsertFailed {
        location: &'static Location<'static>,
        driver: Driver,
    },

    /// Unable to connect to the database
    #[error("Failed to connect to {driver} database: {source}, {location}")]
    ConnectionError {
        source: Arc<UrlError>,
        driver: Driver,
        location: &'static Location<'static>,
    },

    /// Unable to create a connection pool
    #[error("Failed to create r2d2 {driver} connection pool: {source}, {location}")]
    ConnectionPool {
        source: Arc<r2d2::Error>,
        driver: Driver,
        location: &'static Location<'static>,
    },

    /// Unable to create the directory holding the database file
    #[error("Failed to create the {driver} database directory `{path}`: {source}")]
    UnableToCreateDirectory {
        path: String,
        source: Arc<std::io::Error>,
        driver: Driver,
    },
}

impl Error {
    #[must_use]
    pub fn is_unique_constraint_violation(&self) -> bool {
        matches!(self, Error::UniqueConstraintViolation { .. })
    }
}

impl From<r2d2_sqlite::rusqlite::Error> for Error {
    #[track_caller]
    fn from(err: r2d2_sqlite::rusqlite::Error) -> Self {
        match err {
            r2d2_sqlite::rusqlite::Error::QueryReturnedNoRows => Error::QueryReturnedNoRows {
                source: Arc::new(err),
                driver: Driver::Sqlite3,
                location: Location::caller(),
            },
            r2d2_sqlite::rusqlite::Error::SqliteFailure(ffi::Error { extended_code, .. }, _)
                if extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Error::UniqueConstraintViolation {
                    source: Arc::new(err),
                    driver: Driver::Sqlite3,
                    location: Location::caller(),
                }
            }
            _ => Error::InvalidQuery {
                source: Arc::new(err),
                driver: Driver::Sqlite3,
                location: Location::caller(),
            },
        }
    }
}

impl From<r2d2_mysql::mysql::Error> for Error {
    #[track_caller]
    fn from(err: r2d2_mysql::mysql::Error) -> Self {
        match err {
            r2d2_mysql::mysql::Error::MySqlError(ref server_error) if server_error.code == MYSQL_DUPLICATE_ENTRY => {
                Error::UniqueConstraintViolation {
                    source: Arc::new(err),
                    driver: Driver::MySQL,
                    location: Location::caller(),
                }
            }
            _ => Error::InvalidQuery {
                source: Arc::new(err),
                driver: Driver::MySQL,
                location: Location::caller(),
            },
        }
    }
}

impl From<UrlError> for Error {
    #[track_caller]
    fn from(err: UrlError) -> Self {
        Self::ConnectionError {
            source: Arc::new(err),
            driver: Driver::MySQL,
            location: Location::caller(),
        }
    }
}

impl From<(r2d2::Error, Driver)> for Error {
    #[track_caller]
    fn from(e: (r2d2::Error, Driver)) -> Self {
        let (err, driver) = e;
        Self::ConnectionPool {
            source: Arc::new(err),
            driver,
            location: Location::caller(),
        }
    }
}

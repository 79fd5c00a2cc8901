//! Configuration data structures for the Modelos API.
//!
//! This module contains the configuration data structures for the Modelos
//! API, a small record-management backend.
//!
//! The current version for configuration is [`v1`].
//!
//! The configuration is loaded in layers, each one overriding the previous:
//!
//! 1. The default values of the [`Configuration`] struct.
//! 2. A TOML file. Its location is taken from the
//!    `MODELOS_API_CONFIG_TOML_PATH` env var or the application default path.
//!    Alternatively, the whole TOML content can be injected with the
//!    `MODELOS_API_CONFIG_TOML` env var.
//! 3. Env vars prefixed with `MODELOS_API_CONFIG_OVERRIDE_`. Nested sections
//!    are separated with a double underscore, for example
//!    `MODELOS_API_CONFIG_OVERRIDE_ADMIN__PASSWORD`.
pub mod v1;

use std::env;
use std::panic::Location;
use std::sync::Arc;

use thiserror::Error;

// Environment variables

/// The whole `modelos-api.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
const ENV_VAR_CONFIG_TOML: &str = "MODELOS_API_CONFIG_TOML";

/// The `modelos-api.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "MODELOS_API_CONFIG_TOML_PATH";

/// Prefix for the env vars overriding single configuration options.
pub const CONFIG_OVERRIDE_PREFIX: &str = "MODELOS_API_CONFIG_OVERRIDE_";

/// Path separator used in the override env vars to reach nested options.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type Logging = v1::logging::Logging;
pub type Database = v1::database::Database;
pub type HttpApi = v1::http_api::HttpApi;
pub type Admin = v1::admin::Admin;

pub use v1::database::Driver;
pub use v1::logging::Threshold;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    ///
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading extra configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading extra configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading extra configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Unable to load or merge the configuration layers.
    #[error("Failed processing the configuration: {source}, {location}")]
    ConfigError {
        source: Arc<figment::Error>,
        location: &'static Location<'static>,
    },

    /// Unable to encode the configuration into TOML.
    #[error("Unable to encode the configuration into TOML: {source}, {location}")]
    UnableToEncodeConfig {
        source: Arc<toml::ser::Error>,
        location: &'static Location<'static>,
    },

    /// Unable to write the configuration file.
    #[error("Unable to save the configuration into `{path}`: {source}")]
    UnableToSaveConfigFile { path: String, source: Arc<std::io::Error> },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: Arc::new(err),
            location: Location::caller(),
        }
    }
}

impl From<toml::ser::Error> for Error {
    #[track_caller]
    fn from(err: toml::ser::Error) -> Self {
        Self::UnableToEncodeConfig {
            source: Arc::new(err),
            location: Location::caller(),
        }
    }
}

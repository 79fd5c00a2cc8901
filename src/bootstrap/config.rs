//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `MODELOS_API_`.

use modelos_api_configuration::{Configuration, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/modelos-api.development.sqlite3.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `modelos-api.toml`.
/// 2. Environment variable: `MODELOS_API_CONFIG_TOML`. The variable contains the same contents as the `modelos-api.toml` file.
///
/// Environment variable has priority over the config file.
///
/// Refer to the [configuration documentation](modelos_api_configuration) for the configuration options.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either
/// the config file or the env var `MODELOS_API_CONFIG_TOML`.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string()).expect("it should be able to read the configuration source");

    Configuration::load(&info).expect("it should be able to load the configuration")
}

//! Setup for the main application.
//!
//! The [`setup`] function builds the application dependencies:
//!
//! 1. Load the configuration.
//! 2. Initialize the logging.
//! 3. Build the [`Registry`], which connects to the record store and creates
//!    the schema when missing.
//! 4. Build the admin [`Authenticator`].
use std::sync::Arc;

use modelos_api_configuration::Configuration;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::auth::Authenticator;
use crate::core::Registry;

/// It loads the configuration from the environment and builds the application.
#[must_use]
pub fn setup() -> (Configuration, Arc<Registry>, Arc<Authenticator>) {
    let configuration = initialize_configuration();

    let (registry, authenticator) = initialize_with_configuration(&configuration);

    (configuration, registry, authenticator)
}

/// It initializes the application with the given configuration.
#[must_use]
pub fn initialize_with_configuration(configuration: &Configuration) -> (Arc<Registry>, Arc<Authenticator>) {
    initialize_logging(configuration);

    (
        Arc::new(initialize_registry(configuration)),
        Arc::new(initialize_authenticator(configuration)),
    )
}

/// # Panics
///
/// Will panic if the record store can not be opened or its schema can not be
/// created.
#[must_use]
pub fn initialize_registry(config: &Configuration) -> Registry {
    match Registry::new(config) {
        Ok(registry) => registry,
        Err(error) => {
            panic!("{}", error)
        }
    }
}

#[must_use]
pub fn initialize_authenticator(config: &Configuration) -> Authenticator {
    Authenticator::new(&config.admin)
}

pub fn initialize_logging(config: &Configuration) {
    bootstrap::logging::setup(config);
}

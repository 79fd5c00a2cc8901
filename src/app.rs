//! Modelos API application.
//!
//! The application has a global configuration for its jobs. It's basically a
//! container for other services.
//!
//! Jobs executed always:
//!
//! - Modelos REST API
use std::sync::Arc;

use modelos_api_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::model_api;
use crate::core::auth::Authenticator;
use crate::core::Registry;
use crate::servers;

/// It starts the application jobs and returns their handles.
///
/// # Panics
///
/// Will panic if the API server can not be started.
pub async fn start(config: &Configuration, registry: Arc<Registry>, authenticator: Arc<Authenticator>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start HTTP API
    jobs.push(model_api::start_job(&config.http_api, registry, authenticator, servers::apis::Version::V1).await);

    jobs
}

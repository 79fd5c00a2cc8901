//! Modelos API job starter.
//!
//! The [`model_api::start_job`](crate::bootstrap::jobs::model_api::start_job)
//! function starts the REST API.
//!
//! It spawns a new asynchronous task, the "**launcher**". The launcher binds
//! the listener and sends the bound address back. The job waits for that
//! message before returning, so the API is listening when `start_job` returns.
//!
//! Refer to the [configuration documentation](modelos_api_configuration)
//! for the API configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use modelos_api_configuration::HttpApi;
use tokio::task::JoinHandle;
use tracing::info;

use crate::core::auth::Authenticator;
use crate::core::Registry;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::apis::Version;

/// This function starts a new API server with the provided configuration.
///
/// The functions starts a new concurrent task that will run the API server.
///
/// # Panics
///
/// It would panic if the API server can not be started, for example, when the
/// bind address is already in use.
pub async fn start_job(
    config: &HttpApi,
    registry: Arc<Registry>,
    authenticator: Arc<Authenticator>,
    version: Version,
) -> JoinHandle<()> {
    match version {
        Version::V1 => start_v1(config.bind_address, registry, authenticator).await,
    }
}

async fn start_v1(socket: SocketAddr, registry: Arc<Registry>, authenticator: Arc<Authenticator>) -> JoinHandle<()> {
    let server = ApiServer::new(Launcher::new(socket))
        .start(registry, authenticator)
        .await
        .expect("it should be able to start the API server");

    info!(target: "API", "Started on http://{}", server.state.binding);

    tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");
        server.state.task.await.expect("failed to close service");
    })
}

//! Logic to run the HTTP API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`.
//!
//! The `ApiServer` struct is responsible for:
//! - Starting and stopping the server.
//! - Keeping the state of the server: `running` or `stopped`.
//!
//! `ApiServer` relies on a launcher to start the actual server.
//!
//! 1. `ApiServer::start` -> spawns new asynchronous task.
//! 2. `Launcher::start` -> starts the server on the spawned task.
//!
//! The `Launcher` struct is responsible for:
//!
//! - Binding the listener to the configured socket address.
//! - Knowing how to start the server with graceful shutdown.
use std::net::SocketAddr;
use std::sync::Arc;

use derive_more::Constructor;
use thiserror::Error;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::{error, info};

use super::routes::router;
use crate::core::auth::Authenticator;
use crate::core::Registry;
use crate::servers::signals::{shutdown_signal_with_message, Halted};

/// Errors that can occur when starting or stopping the API server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to start the API server, it did not report its bound address")]
    UnableToStart,
    #[error("Unable to send the halt message, the API server task is gone")]
    UnableToSendHaltingMessage,
    #[error("The API server task failed: {source}")]
    UnableToJoinTask { source: tokio::task::JoinError },
}

/// A stopped API server.
#[allow(clippy::module_name_repetitions)]
pub type StoppedApiServer = ApiServer<Stopped>;

/// A running API server.
#[allow(clippy::module_name_repetitions)]
pub type RunningApiServer = ApiServer<Running>;

/// An API server controller.
///
/// It's a state machine: a `stopped` server can be started and a `running`
/// server can be stopped. The launcher, and therefore the configured socket
/// address, is kept between runs.
#[allow(clippy::module_name_repetitions)]
pub struct ApiServer<S> {
    /// The state of the server: `running` or `stopped`.
    pub state: S,
}

/// A stopped API server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running API server state.
pub struct Running {
    /// The socket address the server is listening on.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

/// Message the launcher sends once the listener is bound.
#[derive(Debug)]
pub struct Started {
    pub address: SocketAddr,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns an `ApiServer` controller in `running`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if no `SocketAddr` is returned after launching the server.
    pub async fn start(self, registry: Arc<Registry>, authenticator: Arc<Authenticator>) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            launcher.start(registry, authenticator, tx_start, rx_halt).await;
            launcher
        });

        let started = rx_start.await.map_err(|_| Error::UnableToStart)?;

        Ok(ApiServer {
            state: Running {
                binding: started.address,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// It stops the server and returns an `ApiServer` controller in `stopped`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the task killer signal was closed.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::UnableToSendHaltingMessage)?;

        let launcher = self.state.task.await.map_err(|source| Error::UnableToJoinTask { source })?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// It starts the API server with graceful shutdown.
#[derive(Constructor, Debug, Clone, Copy)]
pub struct Launcher {
    bind_to: SocketAddr,
}

impl Launcher {
    /// It binds the listener, reports the bound address and serves the API
    /// until the halt message (or a global shutdown signal) arrives.
    ///
    /// When the listener can not be bound the error is logged and the start
    /// sender is dropped without sending anything.
    pub async fn start(
        &self,
        registry: Arc<Registry>,
        authenticator: Arc<Authenticator>,
        tx_start: Sender<Started>,
        rx_halt: Receiver<Halted>,
    ) {
        let listener = match tokio::net::TcpListener::bind(self.bind_to).await {
            Ok(listener) => listener,
            Err(err) => {
                error!("Unable to bind the API server to {}: {err}", self.bind_to);
                return;
            }
        };

        let address = match listener.local_addr() {
            Ok(address) => address,
            Err(err) => {
                error!("Unable to get the local address of the API server: {err}");
                return;
            }
        };

        let app = router(registry, authenticator);

        info!(target: "API", "Starting on http://{}", address);

        if tx_start.send(Started { address }).is_err() {
            error!("Unable to report the API server address, the controller is gone");
            return;
        }

        let halted = shutdown_signal_with_message(rx_halt, format!("Shutting down API server on http://{address}"));

        if let Err(err) = axum::serve(listener, app).with_graceful_shutdown(halted).await {
            error!("The API server on http://{address} failed: {err}");
        }

        info!(target: "API", "Stopped server running on http://{}", address);
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use modelos_api::bootstrap::app::initialize_with_configuration;
use modelos_api::core::auth::Authenticator;
use modelos_api::core::model::{CreateModel, Model};
use modelos_api::core::Registry;
use modelos_api::servers::apis::server::{ApiServer, Launcher, Running, Stopped};
use modelos_api_configuration::Configuration;

use super::connection_info::ConnectionInfo;

pub struct Environment<S> {
    pub config: Arc<Configuration>,
    pub registry: Arc<Registry>,
    pub authenticator: Arc<Authenticator>,
    pub server: ApiServer<S>,
}

impl<S> Environment<S> {
    /// Add a model directly to the registry.
    pub fn add_model(&self, section: &str, model_name: &str) -> Model {
        self.registry
            .create(CreateModel {
                section: section.to_string(),
                model_name: model_name.to_string(),
                ..Default::default()
            })
            .unwrap()
    }
}

impl Environment<Stopped> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let (registry, authenticator) = initialize_with_configuration(configuration);

        let server = ApiServer::new(Launcher::new(configuration.http_api.bind_address));

        Self {
            config: configuration.clone(),
            registry,
            authenticator,
            server,
        }
    }

    pub async fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            registry: self.registry.clone(),
            authenticator: self.authenticator.clone(),
            server: self.server.start(self.registry, self.authenticator).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            registry: self.registry,
            authenticator: self.authenticator,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn get_connection_info(&self) -> ConnectionInfo {
        ConnectionInfo::anonymous(&self.server.state.binding.to_string())
    }

    #[allow(dead_code)]
    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }
}

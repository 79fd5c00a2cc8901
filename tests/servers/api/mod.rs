use std::sync::Arc;

use modelos_api::core::Registry;
use modelos_api::servers::apis::server;

pub mod connection_info;
pub mod environment;
pub mod v1;

pub type Started = environment::Environment<server::Running>;

/// It forces a database error by dropping all tables.
/// That makes any query fail.
pub fn force_database_error(registry: &Arc<Registry>) {
    registry.drop_database_tables().unwrap();
}

//! API configurations used for testing.
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use modelos_api_configuration::{Configuration, Threshold};

use crate::random;

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one API at the same time.
///
/// - The API binds to an ephemeral port on the loopback interface.
/// - The record store is a new `SQLite3` file in the temp dir.
/// - Logging is disabled. Change it to `Threshold::Debug` to debug tests.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket address for API
    let api_port = 0u16;
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), api_port);

    // Ephemeral sqlite database
    let temp_directory = env::temp_dir();
    let random_db_id = random::string(16);
    let temp_file = temp_directory.join(format!("data_{random_db_id}.db"));
    temp_file.to_str().unwrap().clone_into(&mut config.database.path);

    config
}

/// Ephemeral configuration with custom admin credentials.
#[must_use]
pub fn ephemeral_with_admin(username: &str, password: &str) -> Configuration {
    let mut config = ephemeral();

    username.clone_into(&mut config.admin.username);
    password.clone_into(&mut config.admin.password);

    config
}

use modelos_api::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, registry, authenticator) = bootstrap::app::setup();

    info!("Configuration:\n{}", config.clone().mask_secrets().to_json());

    let jobs = app::start(&config, registry, authenticator).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Modelos API shutting down..");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("Modelos API successfully shutdown.");
        }
    }
}

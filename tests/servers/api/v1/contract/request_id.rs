use modelos_api_test_helpers::configuration;
use tracing::level_filters::LevelFilter;
use uuid::Uuid;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_add_a_uuid_request_id_to_every_response() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).health_check().await;

    let request_id = response.headers().get("x-request-id").unwrap().to_str().unwrap();

    assert!(Uuid::parse_str(request_id).is_ok());

    env.stop().await;
}

#[tokio::test]
async fn should_keep_the_request_id_sent_by_the_client() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let url = Client::new(env.get_connection_info()).base_url("health");

    let response = reqwest::Client::new()
        .get(url)
        .header("x-request-id", "my-request-id")
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "my-request-id");

    env.stop().await;
}

use modelos_api::core::auth::ADMIN_ROLE;
use modelos_api_test_helpers::configuration;
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{assert_invalid_credentials, assert_session};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_issue_a_session_token_for_the_admin_credentials() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_with_admin("boss", "s3cr3t").into()).await;

    let response = Client::new(env.get_connection_info())
        .login(&json!({"username": "boss", "password": "s3cr3t"}))
        .await;

    let session = assert_session(response).await;

    assert_eq!(session.role, ADMIN_ROLE);

    let claims = env.authenticator.verify(&session.token).unwrap();

    assert_eq!(claims.sub, "boss");
    assert_eq!(claims.exp - claims.iat, 8 * 60 * 60);

    env.stop().await;
}

#[tokio::test]
async fn should_reject_wrong_admin_credentials() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_with_admin("boss", "s3cr3t").into()).await;

    let client = Client::new(env.get_connection_info());

    assert_invalid_credentials(client.login(&json!({"username": "boss", "password": "wrong"})).await).await;
    assert_invalid_credentials(client.login(&json!({"username": "admin", "password": "s3cr3t"})).await).await;
    assert_invalid_credentials(client.login(&json!({})).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_reply_with_a_message_when_the_login_body_is_malformed() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .send_raw_json(reqwest::Method::POST, "login", "{not json")
        .await;

    assert_eq!(response.status(), 400);

    let body = response.json::<serde_json::Value>().await.unwrap();

    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body: "));
    assert!(body.get("error").is_none());

    env.stop().await;
}

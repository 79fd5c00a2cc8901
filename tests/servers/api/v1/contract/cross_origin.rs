use modelos_api_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_requests_from_any_origin() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let url = Client::new(env.get_connection_info()).base_url("modelos");

    let response = reqwest::Client::new()
        .get(url)
        .header("origin", "http://front-end.example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("access-control-allow-origin").unwrap(), "*");

    env.stop().await;
}

#[tokio::test]
async fn should_answer_the_preflight_requests() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let url = Client::new(env.get_connection_info()).base_url("modelos/1");

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, url)
        .header("origin", "http://front-end.example.com")
        .header("access-control-request-method", "PUT")
        .header("access-control-request-headers", "content-type,authorization")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let headers = response.headers();

    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");

    let allowed_methods = headers.get("access-control-allow-methods").unwrap().to_str().unwrap();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(allowed_methods.contains(method), "missing {method} in {allowed_methods}");
    }

    let allowed_headers = headers
        .get("access-control-allow-headers")
        .unwrap()
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed_headers.contains("content-type"));
    assert!(allowed_headers.contains("authorization"));

    env.stop().await;
}

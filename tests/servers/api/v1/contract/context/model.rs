use modelos_api_test_helpers::configuration;
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_created_model, assert_deleted, assert_duplicate_model, assert_failed_to_access_the_record_store,
    assert_invalid_date, assert_invalid_model_id_param, assert_malformed_body, assert_missing_field, assert_model,
    assert_model_list, assert_model_not_found,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::{force_database_error, Started};

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[tokio::test]
async fn should_create_delete_and_then_not_find_a_model() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let model = assert_created_model(client.add_model(&json!({"seccion": "A", "modelo": "X"})).await).await;

    assert_eq!(model.id, 1);
    assert_eq!(model.seccion, "A");
    assert_eq!(model.modelo, "X");
    assert_eq!(model.nombre, "X");
    assert_eq!(model.cliente, "");
    assert_eq!(model.fecha, today());
    assert_eq!(model.ficha_json, json!({}));

    assert_duplicate_model(client.add_model(&json!({"seccion": "A", "modelo": "X"})).await, "A", "X").await;

    assert_deleted(client.delete_model("1").await, 1).await;

    assert_model_not_found(client.get_model("1").await, 1).await;

    env.stop().await;
}

mod for_model_creation {
    use super::*;

    #[tokio::test]
    async fn should_allow_creating_a_model_with_all_the_fields() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info())
            .add_model(&json!({
                "seccion": "Calzado",
                "modelo": "Bota Trekking",
                "cliente": "ACME",
                "fecha": "2024-05-10",
                "ficha_json": {"talla": 42, "colores": ["negro", "marron"]}
            }))
            .await;

        let model = assert_created_model(response).await;

        assert_eq!(model.cliente, "ACME");
        assert_eq!(model.fecha, "2024-05-10");
        assert_eq!(model.ficha_json, json!({"talla": 42, "colores": ["negro", "marron"]}));
        assert_eq!(env.registry.get(model.id).unwrap().client, "ACME");

        env.stop().await;
    }

    #[tokio::test]
    async fn should_accept_nombre_as_the_model_name() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info())
            .add_model(&json!({"seccion": "A", "nombre": "X"}))
            .await;

        let model = assert_created_model(response).await;

        assert_eq!(model.modelo, "X");
        assert_eq!(model.nombre, "X");

        env.stop().await;
    }

    #[tokio::test]
    async fn should_store_a_form_that_is_not_json_as_raw_text() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info())
            .add_model(&json!({"seccion": "A", "modelo": "X", "ficha_json": "talla: 42"}))
            .await;

        assert_eq!(assert_created_model(response).await.ficha_json, json!({"raw": "talla: 42"}));

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_section_is_missing() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let client = Client::new(env.get_connection_info());

        assert_missing_field(client.add_model(&json!({"modelo": "X"})).await, "seccion").await;
        assert_missing_field(client.add_model(&json!({"seccion": "  ", "modelo": "X"})).await, "seccion").await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_model_name_is_missing() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info()).add_model(&json!({"seccion": "A"})).await;

        assert_missing_field(response, "modelo").await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_date_is_not_valid() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info())
            .add_model(&json!({"seccion": "A", "modelo": "X", "fecha": "mañana"}))
            .await;

        assert_invalid_date(response, "mañana").await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_body_is_not_valid_json() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info())
            .send_raw_json(reqwest::Method::POST, "modelos", "{\"seccion\": ")
            .await;

        assert_malformed_body(response).await;
        assert!(env.registry.list_all().unwrap().is_empty());

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_record_store_fails() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        force_database_error(&env.registry);

        let response = Client::new(env.get_connection_info())
            .add_model(&json!({"seccion": "A", "modelo": "X"}))
            .await;

        assert_failed_to_access_the_record_store(response).await;

        env.stop().await;
    }
}

mod for_model_listing {
    use super::*;

    #[tokio::test]
    async fn should_list_all_the_models_the_most_recent_first() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        env.add_model("A", "X");
        env.add_model("B", "Y");
        env.add_model("A", "Z");

        let models = assert_model_list(Client::new(env.get_connection_info()).get_models().await).await;

        let ids: Vec<i64> = models.iter().map(|model| model.id).collect();

        assert_eq!(ids, vec![3, 2, 1]);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_return_an_empty_list_when_there_are_no_models() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let models = assert_model_list(Client::new(env.get_connection_info()).get_models().await).await;

        assert!(models.is_empty());

        env.stop().await;
    }

    #[tokio::test]
    async fn should_list_only_the_models_of_the_requested_section() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        env.add_model("Calzado", "X");
        env.add_model("Bolsos", "Y");
        env.add_model("Calzado", "Z");

        let client = Client::new(env.get_connection_info());

        let models = assert_model_list(client.get_section_models("Calzado").await).await;

        let names: Vec<&str> = models.iter().map(|model| model.modelo.as_str()).collect();

        assert_eq!(names, vec!["Z", "X"]);

        let models = assert_model_list(client.get_section_models("calzado").await).await;

        assert!(models.is_empty());

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_record_store_fails() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        force_database_error(&env.registry);

        let client = Client::new(env.get_connection_info());

        assert_failed_to_access_the_record_store(client.get_models().await).await;
        assert_failed_to_access_the_record_store(client.get_section_models("A").await).await;

        env.stop().await;
    }
}

mod for_model_retrieval {
    use super::*;

    #[tokio::test]
    async fn should_return_a_model() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let added = env.add_model("A", "X");

        let model = assert_model(Client::new(env.get_connection_info()).get_model(&added.id.to_string()).await).await;

        assert_eq!(model.id, added.id);
        assert_eq!(model.modelo, "X");

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_model_does_not_exist() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        assert_model_not_found(Client::new(env.get_connection_info()).get_model("42").await, 42).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_id_is_not_an_integer() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let client = Client::new(env.get_connection_info());

        for invalid_id in ["abc", "1.5", "-"] {
            assert_invalid_model_id_param(client.get_model(invalid_id).await, invalid_id).await;
        }

        env.stop().await;
    }
}

mod for_model_update {
    use super::*;

    #[tokio::test]
    async fn should_update_only_the_supplied_fields() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let added = env.add_model("A", "X");

        let client = Client::new(env.get_connection_info());

        let model = assert_model(
            client
                .update_model(&added.id.to_string(), &json!({"cliente": "ACME"}))
                .await,
        )
        .await;

        assert_eq!(model.cliente, "ACME");
        assert_eq!(model.fecha, added.date);
        assert_eq!(model.ficha_json, json!({}));

        let model = assert_model(
            client
                .update_model(&added.id.to_string(), &json!({"ficha_json": {"a": 1}}))
                .await,
        )
        .await;

        assert_eq!(model.cliente, "ACME");
        assert_eq!(model.ficha_json, json!({"a": 1}));

        let model = assert_model(client.get_model(&added.id.to_string()).await).await;

        assert_eq!(model.ficha_json, json!({"a": 1}));

        env.stop().await;
    }

    #[tokio::test]
    async fn should_clear_a_field_updated_with_an_empty_string() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let added = env.add_model("A", "X");

        let client = Client::new(env.get_connection_info());

        client
            .update_model(&added.id.to_string(), &json!({"cliente": "ACME"}))
            .await;

        let model = assert_model(client.update_model(&added.id.to_string(), &json!({"cliente": ""})).await).await;

        assert_eq!(model.cliente, "");

        env.stop().await;
    }

    #[tokio::test]
    async fn should_keep_a_form_that_is_not_json_as_raw_text() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let added = env.add_model("A", "X");

        let response = Client::new(env.get_connection_info())
            .update_model(&added.id.to_string(), &json!({"ficha_json": "not json"}))
            .await;

        assert_eq!(assert_model(response).await.ficha_json, json!({"raw": "not json"}));

        env.stop().await;
    }

    #[tokio::test]
    async fn should_parse_a_form_sent_as_serialized_json() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let added = env.add_model("A", "X");

        let response = Client::new(env.get_connection_info())
            .update_model(&added.id.to_string(), &json!({"ficha_json": "{\"a\":1}"}))
            .await;

        assert_eq!(assert_model(response).await.ficha_json, json!({"a": 1}));

        env.stop().await;
    }

    #[tokio::test]
    async fn should_not_change_anything_when_the_date_is_not_valid() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let added = env.add_model("A", "X");

        let response = Client::new(env.get_connection_info())
            .update_model(&added.id.to_string(), &json!({"cliente": "ACME", "fecha": "2024-02-30"}))
            .await;

        assert_invalid_date(response, "2024-02-30").await;
        assert_eq!(env.registry.get(added.id).unwrap(), added);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_model_does_not_exist() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info())
            .update_model("42", &json!({"cliente": "ACME"}))
            .await;

        assert_model_not_found(response, 42).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_id_is_not_an_integer() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info())
            .update_model("abc", &json!({"cliente": "ACME"}))
            .await;

        assert_invalid_model_id_param(response, "abc").await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_body_is_not_valid_json() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let added = env.add_model("A", "X");

        let response = Client::new(env.get_connection_info())
            .send_raw_json(reqwest::Method::PUT, &format!("modelos/{}", added.id), "not json")
            .await;

        assert_malformed_body(response).await;

        env.stop().await;
    }
}

mod for_model_deletion {
    use super::*;

    #[tokio::test]
    async fn should_delete_a_model() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let added = env.add_model("A", "X");

        assert_deleted(Client::new(env.get_connection_info()).delete_model(&added.id.to_string()).await, added.id).await;

        assert!(env.registry.list_all().unwrap().is_empty());

        env.stop().await;
    }

    #[tokio::test]
    async fn should_delete_a_model_with_the_post_alternative_route() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let added = env.add_model("A", "X");

        let client = Client::new(env.get_connection_info());

        assert_deleted(client.post_delete_model(&added.id.to_string()).await, added.id).await;

        assert_model_not_found(client.post_delete_model(&added.id.to_string()).await, added.id).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_model_does_not_exist() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let client = Client::new(env.get_connection_info());

        assert_model_not_found(client.delete_model("42").await, 42).await;
        assert_model_not_found(client.post_delete_model("42").await, 42).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_id_is_not_an_integer() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let client = Client::new(env.get_connection_info());

        assert_invalid_model_id_param(client.delete_model("abc").await, "abc").await;
        assert_invalid_model_id_param(client.post_delete_model("abc").await, "abc").await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_never_reuse_the_id_of_a_deleted_model() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let client = Client::new(env.get_connection_info());

        let first = env.add_model("A", "X");

        assert_deleted(client.delete_model(&first.id.to_string()).await, first.id).await;

        let second = assert_created_model(client.add_model(&json!({"seccion": "A", "modelo": "X"})).await).await;

        assert!(second.id > first.id);

        env.stop().await;
    }
}

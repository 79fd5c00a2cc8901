use reqwest::{Method, Response};
use serde::Serialize;

use crate::servers::api::connection_info::ConnectionInfo;

/// API Client
pub struct Client {
    connection_info: ConnectionInfo,
    base_path: String,
}

impl Client {
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/api/".to_string(),
        }
    }

    pub async fn health_check(&self) -> Response {
        self.get("health").await
    }

    pub async fn get_models(&self) -> Response {
        self.get("modelos").await
    }

    pub async fn get_section_models(&self, section: &str) -> Response {
        self.get(&format!("secciones/{section}/modelos")).await
    }

    pub async fn get_model(&self, id: &str) -> Response {
        self.get(&format!("modelos/{id}")).await
    }

    pub async fn add_model<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_form("modelos", form).await
    }

    pub async fn update_model<T: Serialize + ?Sized>(&self, id: &str, form: &T) -> Response {
        self.put_form(&format!("modelos/{id}"), form).await
    }

    pub async fn delete_model(&self, id: &str) -> Response {
        self.delete(&format!("modelos/{id}")).await
    }

    /// The `POST` alternative to `DELETE /modelos/{id}`.
    pub async fn post_delete_model(&self, id: &str) -> Response {
        self.post_empty(&format!("modelos/{id}/delete")).await
    }

    pub async fn login<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_form("login", form).await
    }

    pub async fn get(&self, path: &str) -> Response {
        get(&self.base_url(path)).await
    }

    pub async fn post_empty(&self, path: &str) -> Response {
        reqwest::Client::new().post(self.base_url(path)).send().await.unwrap()
    }

    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        reqwest::Client::new()
            .post(self.base_url(path))
            .json(&form)
            .send()
            .await
            .unwrap()
    }

    pub async fn put_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        reqwest::Client::new()
            .put(self.base_url(path))
            .json(&form)
            .send()
            .await
            .unwrap()
    }

    /// It sends a request with a JSON content type and the body as it is.
    pub async fn send_raw_json(&self, method: Method, path: &str, body: &str) -> Response {
        reqwest::Client::new()
            .request(method, self.base_url(path))
            .header("content-type", "application/json")
            .body(body.to_owned())
            .send()
            .await
            .unwrap()
    }

    async fn delete(&self, path: &str) -> Response {
        reqwest::Client::new().delete(self.base_url(path)).send().await.unwrap()
    }

    pub fn base_url(&self, path: &str) -> String {
        format!("http://{}{}{path}", &self.connection_info.bind_address, &self.base_path)
    }
}

pub async fn get(path: &str) -> Response {
    reqwest::Client::builder().build().unwrap().get(path).send().await.unwrap()
}

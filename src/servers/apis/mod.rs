//! The Modelos REST API.
//!
//! Endpoints: [v1].
//!
//! The API is open: no endpoint requires a token. Browser front-ends can call
//! it from any origin.
//!
//! # Table of contents
//!
//! - [Configuration](#configuration)
//! - [Endpoints](#endpoints)
//! - [Errors](#errors)
//!
//! # Configuration
//!
//! The configuration file has a [`[http_api]`](modelos_api_configuration::HttpApi)
//! section with the socket address the API binds to.
//!
//! ```toml
//! [http_api]
//! bind_address = "127.0.0.1:5000"
//! ```
//!
//! When you run the API you will see a message like this:
//!
//! ```text
//! 2024-05-10T12:00:00.000000Z  INFO API: Starting on http://127.0.0.1:5000
//! ```
//!
//! You can test the API with `curl`:
//!
//! ```bash
//! $ curl -s "http://127.0.0.1:5000/api/health"
//! {"status":"ok","message":"API running"}
//! ```
//!
//! # Endpoints
//!
//! Method and path | Description
//! ---|---
//! `GET /api/health` | [Health check](crate::servers::apis::v1::context::health_check)
//! `GET /api/modelos` | [List all the models](crate::servers::apis::v1::context::model)
//! `GET /api/modelos/{id}` | [Get a model](crate::servers::apis::v1::context::model)
//! `GET /api/secciones/{seccion}/modelos` | [List the models of a section](crate::servers::apis::v1::context::model)
//! `POST /api/modelos` | [Create a model](crate::servers::apis::v1::context::model)
//! `PUT /api/modelos/{id}` | [Update a model](crate::servers::apis::v1::context::model)
//! `DELETE /api/modelos/{id}` | [Delete a model](crate::servers::apis::v1::context::model)
//! `POST /api/modelos/{id}/delete` | Same as `DELETE /api/modelos/{id}`
//! `POST /api/login` | [Admin login](crate::servers::apis::v1::context::login)
//!
//! # Errors
//!
//! Every error response is a JSON object with an `error` field, except for
//! the login endpoint which uses a `message` field.
//!
//! Status | When
//! ---|---
//! `400` | Missing or invalid field, invalid `id` or malformed JSON body
//! `401` | Wrong admin credentials
//! `404` | There is no model with that `id`
//! `409` | The `(seccion, modelo)` pair already exists
//! `500` | The record store failed
pub mod routes;
pub mod server;
pub mod v1;

use serde::{Deserialize, Serialize};

/// The model id URL path parameter.
///
/// For example: `http://127.0.0.1:5000/api/modelos/{id}`.
///
/// It keeps the raw value collected from the URL path. It's parsed by the
/// endpoint handler in order to provide a more specific error message.
#[derive(Deserialize)]
pub struct ModelIdParam(pub String);

/// The version of the HTTP Api.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Version {
    /// The `v1` version of the HTTP Api.
    V1,
}

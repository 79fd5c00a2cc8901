//! Models API context.
//!
//! A model is a product record: it belongs to a section, has an optional
//! client, a date and a free-form JSON form (`ficha_json`).
//!
//! # Endpoints
//!
//! - [List models](#list-models)
//! - [List the models of a section](#list-the-models-of-a-section)
//! - [Get a model](#get-a-model)
//! - [Create a model](#create-a-model)
//! - [Update a model](#update-a-model)
//! - [Delete a model](#delete-a-model)
//!
//! # List models
//!
//! `GET /api/modelos`
//!
//! It returns all the models, the most recent first (descending `id`). There
//! is no pagination.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:5000/api/modelos"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! [
//!     {
//!         "id": 1,
//!         "seccion": "Calzado",
//!         "modelo": "Bota Trekking",
//!         "cliente": "ACME",
//!         "fecha": "2024-05-10",
//!         "ficha_json": {"talla": 42},
//!         "nombre": "Bota Trekking"
//!     }
//! ]
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`ModelResource`](crate::servers::apis::v1::context::model::resources::ModelResource)
//! resource for more information about the response attributes. `nombre`
//! always has the same value as `modelo`.
//!
//! # List the models of a section
//!
//! `GET /api/secciones/{seccion}/modelos`
//!
//! Same as [List models](#list-models) but only with the models of the
//! section. The section name must match exactly, including letter case.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:5000/api/secciones/Calzado/modelos"
//! ```
//!
//! # Get a model
//!
//! `GET /api/modelos/{id}`
//!
//! **Path parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `id` | integer | The model id | Yes | `1`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:5000/api/modelos/1"
//! ```
//!
//! **Example error response** `404`
//!
//! ```json
//! {
//!     "error": "Model 1 not found"
//! }
//! ```
//!
//! # Create a model
//!
//! `POST /api/modelos`
//!
//! **Body fields**
//!
//! Name | Type | Description | Required | Default
//! ---|---|---|---|---
//! `seccion` | string | The section | Yes |
//! `modelo` | string | The model name. `nombre` is accepted as an alias | Yes |
//! `cliente` | string | The client | No | `""`
//! `fecha` | string | `YYYY-MM-DD` date | No | Today (server local date)
//! `ficha_json` | JSON | The form. A string is parsed as JSON | No | `{}`
//!
//! A `ficha_json` string that is not valid JSON is stored as
//! `{"raw": "<string>"}`.
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:5000/api/modelos" \
//!   -H "Content-Type: application/json" \
//!   -d '{"seccion": "Calzado", "modelo": "Bota Trekking"}'
//! ```
//!
//! **Example response** `201`
//!
//! ```json
//! {
//!     "id": 1,
//!     "seccion": "Calzado",
//!     "modelo": "Bota Trekking",
//!     "cliente": "",
//!     "fecha": "2024-05-10",
//!     "ficha_json": {},
//!     "nombre": "Bota Trekking"
//! }
//! ```
//!
//! **Example error response** `409`
//!
//! ```json
//! {
//!     "error": "The model `Bota Trekking` already exists in the section `Calzado`"
//! }
//! ```
//!
//! # Update a model
//!
//! `PUT /api/modelos/{id}`
//!
//! It changes only the supplied fields: `cliente`, `fecha` and `ficha_json`.
//! An empty string clears the field. All the fields change or none does.
//!
//! **Example request**
//!
//! ```bash
//! curl -X PUT "http://127.0.0.1:5000/api/modelos/1" \
//!   -H "Content-Type: application/json" \
//!   -d '{"ficha_json": {"talla": 42}}'
//! ```
//!
//! # Delete a model
//!
//! `DELETE /api/modelos/{id}` or `POST /api/modelos/{id}/delete`
//!
//! Both routes behave the same way.
//!
//! **Example request**
//!
//! ```bash
//! curl -X DELETE "http://127.0.0.1:5000/api/modelos/1"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "deleted",
//!     "message": "Model 1 deleted"
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;

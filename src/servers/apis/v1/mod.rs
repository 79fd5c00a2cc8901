//! The API version `v1`.
//!
//! The API is organized in the following contexts:
//!
//! Context | Description | Version
//! ---|---|---
//! `Health check` | Service status | [`v1`](crate::servers::apis::v1::context::health_check)
//! `Models` | Model records | [`v1`](crate::servers::apis::v1::context::model)
//! `Login` | Admin session tokens | [`v1`](crate::servers::apis::v1::context::login)
//!
//! The endpoints do not include the version number in the path. For example:
//! `/api/modelos`.
pub mod context;
pub mod responses;
pub mod routes;

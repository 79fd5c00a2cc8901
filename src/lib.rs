//! **Modelos API** is a small record-management backend written in [Rust](https://www.rust-lang.org/).
//!
//! It keeps a catalogue of product **models**. Every model belongs to a
//! **section**, has an optional **client**, a calendar **date** and a free-form
//! JSON **form** (`ficha_json`). The API lets you create, list, filter by
//! section, update and delete those records.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Services](#services)
//! - [Installation](#installation)
//! - [Configuration](#configuration)
//! - [Components](#components)
//!
//! # Features
//!
//! - Two interchangeable record stores: an embedded `SQLite3` file or a
//!   networked `MySQL` server. The driver is chosen in the configuration.
//! - Uniqueness of the `(section, model)` pair enforced by the store.
//! - Partial updates of the client, the date and the JSON form, applied
//!   atomically.
//! - A login endpoint issuing a signed session token for the administrator.
//! - Permissive CORS so that browser front-ends can call the API directly.
//!
//! # Services
//!
//! There is only one service: the [REST API](crate::servers::apis). All the
//! endpoints live under the `/api` prefix.
//!
//! # Installation
//!
//! ```text
//! git clone <repository-url> modelos-api \
//!   && cd modelos-api \
//!   && cargo build --release \
//!   && mkdir -p ./storage/modelos-api/lib/database
//! ```
//!
//! Run the API with the default development configuration:
//!
//! ```text
//! cargo run
//! ```
//!
//! # Configuration
//!
//! Refer to the [`modelos-api-configuration`](modelos_api_configuration)
//! crate. The default configuration file is
//! `./share/default/config/modelos-api.development.sqlite3.toml`. You can
//! use another file with the `MODELOS_API_CONFIG_TOML_PATH` env var, or pass
//! the whole TOML content with the `MODELOS_API_CONFIG_TOML` env var.
//!
//! # Components
//!
//! - [`core`]: the domain. The [`Registry`](crate::core::Registry) service, the
//!   record store drivers and the admin login.
//! - [`servers`]: the HTTP API built with [`axum`].
//! - [`bootstrap`]: application setup: configuration, logging and jobs.
//! - [`app`]: starts the jobs.
use modelos_api_clock::clock;

pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;

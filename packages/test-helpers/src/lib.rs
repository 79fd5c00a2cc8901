//! Testing helpers for the Modelos API.
//!
//! It provides configurations that do not collide when several API
//! instances run at the same time, for example in parallel integration tests.
pub mod configuration;
pub mod random;

//! Application bootstrapping.
//!
//! This module includes all the functions to build the application, its dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. There is only one job for now: the
//! [REST API](crate::servers::apis) server.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;

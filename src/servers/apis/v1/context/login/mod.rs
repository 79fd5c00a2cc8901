//! Admin login API context.
//!
//! # Endpoints
//!
//! - [Login](#login)
//!
//! # Login
//!
//! `POST /api/login`
//!
//! It returns a session token when the credentials match the configured
//! [admin](modelos_api_configuration::Admin) ones. The token expires after
//! eight hours. Refer to the [`auth`](crate::core::auth) module for the token
//! format.
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:5000/api/login" \
//!   -H "Content-Type: application/json" \
//!   -d '{"username": "admin", "password": "MyAdminPassword"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiJhZG1pbi...",
//!     "role": "admin"
//! }
//! ```
//!
//! **Example error response** `401`
//!
//! ```json
//! {
//!     "message": "Invalid credentials"
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;

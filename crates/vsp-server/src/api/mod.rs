//! HTTP API
//!
//! - [`error`] - projection of failures into error responses
//! - [`models`] - response bodies
//! - [`handlers`] - route handlers
//! - [`routes`] - Rocket instance assembly

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

//! HTTP API of the demo host service.
//!
//! A handful of documented routes for the plugin to describe.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;

//! HTTP surface for the ACEest workout log.
//!
//! Exposes the shared [`WorkoutStore`](aceest_core::WorkoutStore) over a
//! small JSON API plus a status page and a health check.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;

pub use config::ServerConfig;
pub use logging::init_logging;
pub use routes::build_router;

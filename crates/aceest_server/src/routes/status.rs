use aceest_core::SharedStore;
use axum::{Router, routing::get};

use crate::handlers;

pub fn status_routes() -> Router<SharedStore> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
}

use aceest_core::SharedStore;
use axum::{Router, routing::get};

use crate::handlers;

pub fn workout_routes() -> Router<SharedStore> {
    Router::new().route(
        "/api/workouts",
        get(handlers::list_workouts).post(handlers::create_workout),
    )
}

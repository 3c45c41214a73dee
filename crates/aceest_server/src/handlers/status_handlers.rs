use aceest_core::{SERVICE_NAME, SharedStore};
use axum::{Json, extract::State, response::Html};

use crate::error::ApiResult;
use crate::models::HealthResponse;

/// Human-readable landing page with the current entry count
pub async fn index(State(store): State<SharedStore>) -> ApiResult<Html<String>> {
    let count = store.lock()?.count();

    Ok(Html(format!(
        "<h1>ACEest Fitness API</h1>\
         <p>Status: OK</p>\
         <p>Workouts logged: {count}</p>\
         <p>Use <code>GET /api/workouts</code> and <code>POST /api/workouts</code></p>"
    )))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

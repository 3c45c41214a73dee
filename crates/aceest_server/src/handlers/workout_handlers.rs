use aceest_core::{SharedStore, validate};
use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::error::ApiResult;
use crate::models::{AddWorkoutRequest, WorkoutAddedResponse, WorkoutListResponse};

pub async fn list_workouts(
    State(store): State<SharedStore>,
) -> ApiResult<Json<WorkoutListResponse>> {
    let store = store.lock()?;
    tracing::debug!(count = store.count(), "Listing workouts");

    Ok(Json(WorkoutListResponse {
        workouts: store.list().to_vec(),
    }))
}

pub async fn create_workout(
    State(store): State<SharedStore>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<WorkoutAddedResponse>)> {
    let req = AddWorkoutRequest::from_body(&body);

    let entry = validate(req.workout(), req.duration()).inspect_err(|err| {
        tracing::warn!("Rejected workout: {err}");
    })?;

    let response = WorkoutAddedResponse::from(&entry);

    let mut store = store.lock()?;
    store.append(entry);
    tracing::info!(
        workout = %response.workout,
        duration = response.duration,
        count = store.count(),
        "Workout added"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

pub mod status;
pub mod workouts;

pub use status::status_routes;
pub use workouts::workout_routes;

use aceest_core::SharedStore;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assemble every route over the given store.
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .merge(status_routes())
        .merge(workout_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aceest_core::WorkoutStore;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(body) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(body.to_string())
            }
            None => Body::empty(),
        };

        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn send_json(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let (status, text) = send(app, method, uri, body).await;
        (status, serde_json::from_str(&text).unwrap())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = build_router(WorkoutStore::shared());

        let (status, body) = send_json(app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "service": "aceest-fitness"}));
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let app = build_router(WorkoutStore::shared());

        let (status, body) = send_json(app, Method::GET, "/api/workouts", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"workouts": []}));
    }

    #[tokio::test]
    async fn test_add_then_list_round_trip() {
        let store = WorkoutStore::shared();
        let app = build_router(store.clone());

        let (status, body) = send_json(
            app.clone(),
            Method::POST,
            "/api/workouts",
            Some(r#"{"workout":"Yoga","duration":45}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"message": "Added", "workout": "Yoga", "duration": 45})
        );

        let (status, body) = send_json(app, Method::GET, "/api/workouts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"workouts": [{"workout": "Yoga", "duration": 45}]}));
        assert_eq!(store.lock().unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_add_trims_label_and_coerces_string_duration() {
        let app = build_router(WorkoutStore::shared());

        let (status, body) = send_json(
            app,
            Method::POST,
            "/api/workouts",
            Some(r#"{"workout":"  Run  ","duration":"30"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"message": "Added", "workout": "Run", "duration": 30})
        );
    }

    #[tokio::test]
    async fn test_listing_preserves_insertion_order() {
        let app = build_router(WorkoutStore::shared());

        for body in [
            r#"{"workout":"Run","duration":30}"#,
            r#"{"workout":"Swim","duration":20}"#,
            r#"{"workout":"Run","duration":30}"#,
        ] {
            let (status, _) = send(app.clone(), Method::POST, "/api/workouts", Some(body)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, body) = send_json(app, Method::GET, "/api/workouts", None).await;
        assert_eq!(
            body,
            json!({"workouts": [
                {"workout": "Run", "duration": 30},
                {"workout": "Swim", "duration": 20},
                {"workout": "Run", "duration": 30},
            ]})
        );
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let store = WorkoutStore::shared();
        let app = build_router(store.clone());
        let missing = json!({"error": "Please provide 'workout' and 'duration'"});

        for body in [
            r#"{"workout":"Run"}"#,
            r#"{"duration":10}"#,
            r#"{"workout":"   ","duration":10}"#,
            r#"{"workout":"Run","duration":null}"#,
            r#"{}"#,
        ] {
            let (status, response) =
                send_json(app.clone(), Method::POST, "/api/workouts", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(response, missing, "body: {body}");
        }

        assert_eq!(store.lock().unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_duration_rejected() {
        let store = WorkoutStore::shared();
        let app = build_router(store.clone());
        let invalid = json!({"error": "'duration' must be a positive integer"});

        for body in [
            r#"{"workout":"Run","duration":-1}"#,
            r#"{"workout":"Run","duration":0}"#,
            r#"{"workout":"Run","duration":"abc"}"#,
            r#"{"workout":"Run","duration":false}"#,
            r#"{"workout":"Run","duration":""}"#,
            r#"{"workout":"Run","duration":"   "}"#,
            r#"{"workout":"Run","duration":"3__0"}"#,
            r#"{"workout":"Run","duration":[30]}"#,
        ] {
            let (status, response) =
                send_json(app.clone(), Method::POST, "/api/workouts", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(response, invalid, "body: {body}");
        }

        assert!(store.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_boolean_and_grouped_durations_coerced() {
        let app = build_router(WorkoutStore::shared());

        let (status, body) = send_json(
            app.clone(),
            Method::POST,
            "/api/workouts",
            Some(r#"{"workout":"Plank","duration":true}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"message": "Added", "workout": "Plank", "duration": 1})
        );

        let (status, body) = send_json(
            app,
            Method::POST,
            "/api/workouts",
            Some(r#"{"workout":"Run","duration":"3_0"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"message": "Added", "workout": "Run", "duration": 30})
        );
    }

    #[tokio::test]
    async fn test_malformed_json_treated_as_empty() {
        let store = WorkoutStore::shared();
        let app = build_router(store.clone());

        let (status, body) =
            send_json(app, Method::POST, "/api/workouts", Some("{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Please provide 'workout' and 'duration'"})
        );
        assert!(store.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_body_without_content_type_still_decoded() {
        let app = build_router(WorkoutStore::shared());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/workouts")
            .body(Body::from(r#"{"workout":"Row","duration":15}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_index_shows_count() {
        let app = build_router(WorkoutStore::shared());

        let (status, body) = send(app.clone(), Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("ACEest Fitness API"));
        assert!(body.contains("Workouts logged: 0"));

        send(
            app.clone(),
            Method::POST,
            "/api/workouts",
            Some(r#"{"workout":"Run","duration":30}"#),
        )
        .await;

        let (_, body) = send(app, Method::GET, "/", None).await;
        assert!(body.contains("Workouts logged: 1"));
    }

    #[tokio::test]
    async fn test_unknown_route_and_verb() {
        let app = build_router(WorkoutStore::shared());

        let (status, _) = send(app.clone(), Method::GET, "/api/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(app, Method::DELETE, "/api/workouts", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}

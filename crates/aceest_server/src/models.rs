use aceest_core::{RawDuration, WorkoutEntry};
use serde::Serialize;
use serde_json::{Map, Value};

// ============================================================================
// Request Types
// ============================================================================

/// Body of `POST /api/workouts`.
///
/// Decoding never fails: a body that is not a JSON object (malformed,
/// empty, an array, a scalar) is read as `{}` and left to validation.
#[derive(Debug, Default)]
pub struct AddWorkoutRequest {
    fields: Map<String, Value>,
}

impl AddWorkoutRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let fields = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => fields,
            _ => Map::new(),
        };
        Self { fields }
    }

    /// The `workout` field; anything but a string counts as empty.
    pub fn workout(&self) -> &str {
        self.fields
            .get("workout")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn duration(&self) -> RawDuration {
        RawDuration::from(self.fields.get("duration"))
    }
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct WorkoutListResponse {
    pub workouts: Vec<WorkoutEntry>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutAddedResponse {
    pub message: &'static str,
    pub workout: String,
    pub duration: u32,
}

impl From<&WorkoutEntry> for WorkoutAddedResponse {
    fn from(entry: &WorkoutEntry) -> Self {
        Self {
            message: "Added",
            workout: entry.label().to_string(),
            duration: entry.duration_minutes(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_decodes_object() {
        let req = AddWorkoutRequest::from_body(br#"{"workout":"Yoga","duration":45}"#);
        assert_eq!(req.workout(), "Yoga");
        assert_eq!(req.duration(), RawDuration::Integer(45));
    }

    #[test]
    fn test_request_silent_on_bad_bodies() {
        let bodies: [&[u8]; 5] = [b"", b"not json", b"[1,2]", b"42", b"{\"workout\":"];
        for body in bodies {
            let req = AddWorkoutRequest::from_body(body);
            assert_eq!(req.workout(), "");
            assert_eq!(req.duration(), RawDuration::Missing);
        }
    }

    #[test]
    fn test_request_non_string_workout_is_empty() {
        let req = AddWorkoutRequest::from_body(br#"{"workout":12,"duration":"10"}"#);
        assert_eq!(req.workout(), "");
        assert_eq!(req.duration(), RawDuration::Text("10".to_string()));
    }
}

use serde::Serialize;

/// A single logged workout.
///
/// Serialized as `{"workout": <label>, "duration": <minutes>}`. Fields are
/// private so that every entry in a store has been through
/// [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutEntry {
    #[serde(rename = "workout")]
    label: String,
    #[serde(rename = "duration")]
    duration_minutes: u32,
}

impl WorkoutEntry {
    /// Caller guarantees a trimmed non-empty label and a positive duration.
    pub(crate) fn new_unchecked(label: String, duration_minutes: u32) -> Self {
        debug_assert!(!label.trim().is_empty());
        debug_assert!(duration_minutes > 0);
        Self {
            label,
            duration_minutes,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// One line of the numbered listing, e.g. `"1. Run - 30 minutes"`.
    pub fn list_line(&self, index: usize) -> String {
        format!("{}. {} - {} minutes", index, self.label, self.duration_minutes)
    }
}

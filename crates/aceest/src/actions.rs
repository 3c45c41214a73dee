//! Form actions
//!
//! Each action runs to completion against the state and hands back the
//! dialog the form should show next.

use aceest_core::{ErrorKind, WorkoutStore, validate};

use crate::modals::MessageModal;
use crate::state::AppState;

const MISSING_FIELDS_MESSAGE: &str = "Please enter both workout and duration.";
const INVALID_DURATION_MESSAGE: &str = "Duration must be a positive number.";
const EMPTY_LOG_MESSAGE: &str = "No workouts logged yet.";

/// Validate the two inputs and append the entry.
///
/// On success both inputs are cleared; on failure they are left as typed.
pub fn add_workout(state: &mut AppState) -> MessageModal {
    let form = &mut state.form;

    match validate(&form.workout.value, form.duration.value.as_str()) {
        Ok(entry) => {
            let message = format!("'{}' added successfully!", entry.label());
            tracing::info!(
                workout = entry.label(),
                duration = entry.duration_minutes(),
                "Workout added"
            );

            state.store.append(entry);
            form.reset();
            MessageModal::info("Success", &message)
        }
        Err(err) => {
            tracing::warn!("Rejected workout: {err}");
            let message = match err.kind() {
                ErrorKind::MissingFields => MISSING_FIELDS_MESSAGE,
                ErrorKind::InvalidDuration => INVALID_DURATION_MESSAGE,
            };
            MessageModal::error("Error", message)
        }
    }
}

/// Numbered listing of every entry, or a notice when there are none.
pub fn view_workouts(store: &WorkoutStore) -> MessageModal {
    tracing::debug!(count = store.count(), "Viewing workouts");

    if store.is_empty() {
        return MessageModal::info("Workouts", EMPTY_LOG_MESSAGE);
    }

    let mut listing = String::from("Logged Workouts:");
    for (i, entry) in store.list().iter().enumerate() {
        listing.push('\n');
        listing.push_str(&entry.list_line(i + 1));
    }

    MessageModal::info("Workouts", &listing)
}

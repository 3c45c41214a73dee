use std::sync::{Arc, Mutex};

use crate::model::WorkoutEntry;

/// Store handle shared between request handlers.
pub type SharedStore = Arc<Mutex<WorkoutStore>>;

/// Ordered, append-only collection of workout entries.
///
/// Insertion order is the only ordering and is what listings number by.
/// Entries live until the store is dropped.
#[derive(Debug, Default, Clone)]
pub struct WorkoutStore {
    entries: Vec<WorkoutEntry>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store for sharing across tasks
    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn append(&mut self, entry: WorkoutEntry) {
        self.entries.push(entry);
    }

    pub fn list(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

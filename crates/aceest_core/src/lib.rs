//! Workout logging core
//!
//! This crate holds everything both ACEest surfaces share:
//! - The [`WorkoutEntry`] record
//! - The append-only [`WorkoutStore`] and its [`SharedStore`] handle
//! - The validation rule that turns raw user input into an entry
//!
//! Surfaces never construct entries directly; they pass raw input through
//! [`validate`] and append whatever it returns.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod model;
pub mod store;
pub mod validation;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{ErrorKind, ValidationError};
pub use model::WorkoutEntry;
pub use store::{SharedStore, WorkoutStore};
pub use validation::{RawDuration, validate};

/// Service name reported by health checks.
pub const SERVICE_NAME: &str = "aceest-fitness";

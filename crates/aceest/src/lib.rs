//! Terminal form for the ACEest workout log.
//!
//! A single window with two inputs (workout, duration) and two buttons
//! (add, view) over a [`WorkoutStore`](aceest_core::WorkoutStore) the
//! entry point hands in.

pub mod actions;
pub mod app;
pub mod components;
pub mod logging;
pub mod modals;
pub mod state;

pub use app::App;
pub use logging::init_logging;

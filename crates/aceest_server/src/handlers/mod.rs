pub mod status_handlers;
pub mod workout_handlers;

pub use status_handlers::*;
pub use workout_handlers::*;

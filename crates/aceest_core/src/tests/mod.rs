//! Tests for the workout core
//!
//! Tests are organized by topic:
//! - `validation` - Label and duration acceptance rules
//! - `store` - Append/list/count behavior and shared handles

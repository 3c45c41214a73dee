//! The single rule that admits input into a [`WorkoutStore`](crate::WorkoutStore).
//!
//! Both surfaces call [`validate`] with whatever they received: the form
//! passes its two text fields, the HTTP API passes the decoded JSON values.
//! What one surface accepts the other accepts too.

use serde_json::Value;

use crate::error::ValidationError;
use crate::model::WorkoutEntry;

/// A duration as it arrived from a surface, before integer coercion
#[derive(Debug, Clone, PartialEq)]
pub enum RawDuration {
    /// Not supplied (JSON `null`, absent key, or a blank form field)
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
    /// Any other JSON value (arrays, objects)
    Other,
}

impl RawDuration {
    /// Coerce to whole minutes. `None` means not a positive integer.
    fn coerce(&self) -> Option<u32> {
        match self {
            RawDuration::Missing | RawDuration::Other => None,
            RawDuration::Text(text) => parse_integer(text).and_then(positive_minutes),
            RawDuration::Integer(value) => positive_minutes(*value),
            RawDuration::Float(value) => {
                if !value.is_finite() {
                    return None;
                }
                // Fractional minutes truncate toward zero
                let whole = value.trunc();
                if whole < 1.0 || whole > u32::MAX as f64 {
                    None
                } else {
                    Some(whole as u32)
                }
            }
        }
    }
}

/// Parse base-10 integer text: surrounding whitespace, an optional sign,
/// and single underscores between digits (`"1_000"`).
fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };

    let bytes = digits.as_bytes();
    let well_formed = bytes.first().is_some_and(u8::is_ascii_digit)
        && bytes.last().is_some_and(u8::is_ascii_digit)
        && bytes.iter().all(|b| b.is_ascii_digit() || *b == b'_')
        && !digits.contains("__");
    if !well_formed {
        return None;
    }

    format!("{sign}{}", digits.replace('_', "")).parse().ok()
}

fn positive_minutes(value: i64) -> Option<u32> {
    if value <= 0 {
        return None;
    }
    u32::try_from(value).ok()
}

impl From<&str> for RawDuration {
    fn from(text: &str) -> Self {
        if text.trim().is_empty() {
            RawDuration::Missing
        } else {
            RawDuration::Text(text.to_string())
        }
    }
}

impl From<String> for RawDuration {
    fn from(text: String) -> Self {
        RawDuration::from(text.as_str())
    }
}

impl From<i64> for RawDuration {
    fn from(value: i64) -> Self {
        RawDuration::Integer(value)
    }
}

impl From<i32> for RawDuration {
    fn from(value: i32) -> Self {
        RawDuration::Integer(value.into())
    }
}

impl From<f64> for RawDuration {
    fn from(value: f64) -> Self {
        RawDuration::Float(value)
    }
}

impl From<&Value> for RawDuration {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => RawDuration::Missing,
            // Blank JSON text is present, just not a number
            Value::String(text) => RawDuration::Text(text.clone()),
            Value::Bool(flag) => RawDuration::Integer(i64::from(*flag)),
            Value::Number(number) => match number.as_i64() {
                Some(value) => RawDuration::Integer(value),
                None => RawDuration::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            Value::Array(_) | Value::Object(_) => RawDuration::Other,
        }
    }
}

impl<T: Into<RawDuration>> From<Option<T>> for RawDuration {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawDuration::Missing, Into::into)
    }
}

/// Validate raw input and build a [`WorkoutEntry`].
///
/// Checks run in order: the trimmed label must be non-empty, a duration
/// must be present, and the duration must coerce to a positive integer.
pub fn validate(
    raw_label: &str,
    raw_duration: impl Into<RawDuration>,
) -> Result<WorkoutEntry, ValidationError> {
    let label = raw_label.trim();
    if label.is_empty() {
        return Err(ValidationError::EmptyLabel);
    }

    let raw_duration = raw_duration.into();
    if raw_duration == RawDuration::Missing {
        return Err(ValidationError::MissingDuration);
    }

    let minutes = raw_duration
        .coerce()
        .ok_or(ValidationError::InvalidDuration)?;

    Ok(WorkoutEntry::new_unchecked(label.to_string(), minutes))
}

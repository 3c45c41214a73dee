use std::fmt;

/// Reasons raw input is rejected before it reaches the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Label is empty after trimming whitespace
    EmptyLabel,
    /// Duration was not supplied at all
    MissingDuration,
    /// Duration is not an integer, or is zero or negative
    InvalidDuration,
}

/// Coarse grouping of [`ValidationError`] that surfaces render to users.
///
/// Both surfaces collapse the two "something is missing" cases into one
/// message and keep the bad-duration case separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingFields,
    InvalidDuration,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::EmptyLabel | ValidationError::MissingDuration => {
                ErrorKind::MissingFields
            }
            ValidationError::InvalidDuration => ErrorKind::InvalidDuration,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyLabel => write!(f, "workout label is empty"),
            ValidationError::MissingDuration => write!(f, "duration is missing"),
            ValidationError::InvalidDuration => {
                write!(f, "duration must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_grouping() {
        assert_eq!(ValidationError::EmptyLabel.kind(), ErrorKind::MissingFields);
        assert_eq!(
            ValidationError::MissingDuration.kind(),
            ErrorKind::MissingFields
        );
        assert_eq!(
            ValidationError::InvalidDuration.kind(),
            ErrorKind::InvalidDuration
        );
    }
}

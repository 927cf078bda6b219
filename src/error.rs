//! Error types surfaced to callers of the runner and wire layer.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors reported at the simulation boundary.
///
/// Engines themselves never fail; every variant here is raised before
/// any policy runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    /// The process set or policy parameters violate a precondition.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Human-readable description of every detected problem.
        reason: String,
    },

    /// A request body could not be decoded or a response encoded.
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

impl SimulationError {
    /// Creates an invalid input error.
    #[inline]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Short reason without the category prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidInput { reason } => reason,
            Self::Malformed(msg) => msg,
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let reason = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::invalid_input(reason)
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_from_validation_errors_joins_messages() {
        let errors = vec![
            ValidationError::new(ValidationErrorKind::NegativeArrival, "a"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "b"),
        ];
        let err = SimulationError::from(errors);
        assert_eq!(err, SimulationError::invalid_input("a; b"));
        assert_eq!(err.reason(), "a; b");
        assert_eq!(err.to_string(), "Invalid input: a; b");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        let err = SimulationError::from(json_err);
        assert!(matches!(err, SimulationError::Malformed(_)));
    }
}

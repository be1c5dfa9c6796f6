//! Error types for the Vantage library.
//!
//! Classification itself is total and never returns an error. These variants
//! cover the boundaries around it: parsing external data into signals,
//! blending engine outputs, and looking up stages or methods by name.

use thiserror::Error;

/// A specialized Result type for Vantage operations.
pub type VantageResult<T> = Result<T, VantageError>;

/// The main error type for Vantage operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VantageError {
    /// A caller supplied a value outside the accepted domain.
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument {
        /// Name of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// None of the weighted methods for a stage had a valuation to blend.
    #[error("No valuations available for any weighted method of stage {stage}")]
    NoValuationsAvailable {
        /// Stage code whose methods were all missing.
        stage: String,
    },

    /// A weighting table does not sum to one.
    #[error("Weights for stage {stage} sum to {total}, expected 1.0")]
    InvalidWeights {
        /// Stage code of the broken table.
        stage: String,
        /// Actual sum of the weights.
        total: f64,
    },

    /// A growth stage name could not be parsed.
    #[error("Unknown growth stage: {0}")]
    UnknownStage(String),

    /// A valuation method name could not be parsed.
    #[error("Unknown valuation method: {0}")]
    UnknownMethod(String),
}

impl VantageError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a no-valuations error for the given stage code.
    #[must_use]
    pub fn no_valuations(stage: impl Into<String>) -> Self {
        Self::NoValuationsAvailable {
            stage: stage.into(),
        }
    }

    /// Creates an invalid weights error.
    #[must_use]
    pub fn invalid_weights(stage: impl Into<String>, total: f64) -> Self {
        Self::InvalidWeights {
            stage: stage.into(),
            total,
        }
    }

    /// Returns true if this error comes from bad caller input.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

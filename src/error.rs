//! Error types for force evaluation and orbit integration

use thiserror::Error;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while evaluating the field or integrating an orbit
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("{what}: time {t} outside covered range [{min}, {max}]")]
    TimeOutOfRange {
        what: &'static str,
        t: f64,
        min: f64,
        max: f64,
    },

    #[error("Malformed history: {0}")]
    MalformedHistory(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Non-finite value in {what}")]
    NonFinite { what: &'static str },

    #[error("Integration failed at step {step}: {source}")]
    StepFailed {
        step: usize,
        #[source]
        source: Box<ModelError>,
    },
}

impl ModelError {
    /// True if the failure (or the failure it wraps) is a time outside a table's range
    pub fn is_out_of_range(&self) -> bool {
        match self {
            ModelError::TimeOutOfRange { .. } => true,
            ModelError::StepFailed { source, .. } => source.is_out_of_range(),
            _ => false,
        }
    }
}

// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Misaligned years: entity A covers {a:?}, entity B covers {b:?}")]
    MisalignedYears { a: Vec<i32>, b: Vec<i32> },

    #[error("Division by zero computing {0}")]
    DivisionByZero(String),

    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid series for {entity}: {reason}")]
    InvalidSeries { entity: String, reason: String },
}

impl MetricsError {
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        MetricsError::DivisionByZero(context.into())
    }

    pub fn invalid_series(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        MetricsError::InvalidSeries {
            entity: entity.into(),
            reason: reason.into(),
        }
    }
}

use thiserror::Error;

/// Failures that abort a single chart build.
///
/// Soft misses (a row not matched, a year missing from a row) are not errors:
/// they are recovered in place with zero values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    #[error("category not found in dataset: {0}")]
    CategoryNotFound(String),

    #[error("precomputed sentiment dataset not supplied")]
    SentimentUnavailable,

    #[error("precomputed series '{name}' has {actual} points but its axis has {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, DashboardError>;

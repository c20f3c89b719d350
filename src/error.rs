//! Error types.

/// Errors raised while constructing a [`Polygonator`](crate::Polygonator).
///
/// Construction is the only fallible step; once a population exists,
/// optimization always completes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolygonateError {
    #[error("at least 3 points are required to build a tessellation, got {count}")]
    TooFewPoints { count: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, PolygonateError>;

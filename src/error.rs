use std::fmt;

/// Errors reported at the boundary of a `Network` call.
///
/// Every variant is detected synchronously, before any weight is touched;
/// a failed call never leaves the network partially updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A malformed argument: zero layer size, non-positive learning rate,
    /// or an empty training set when steps were requested.
    InvalidArgument(String),
    /// A vector length does not match the configured layer size.
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidArgument(reason) => {
                write!(f, "invalid argument: {reason}")
            }
            NetworkError::DimensionMismatch { what, expected, actual } => {
                write!(f, "dimension mismatch: {what} has length {actual}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for NetworkError {}

pub type Result<T> = std::result::Result<T, NetworkError>;

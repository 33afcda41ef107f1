use std::error::Error;
use std::fmt;

/// Failures raised while building vectors or combining them.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// An input element could not be read as a number.
    InvalidInput { position: usize, reason: String },
    /// A column vector row did not hold exactly one element.
    InvalidShape { row: usize, len: usize },
    /// Two operands with different dimensions where equal ones are required.
    DimensionMismatch { left: usize, right: usize },
    /// Angle requested against a vector whose norm is zero.
    DegenerateVector { norm: f64 },
    /// Cross product requested outside of 2 or 3 dimensions.
    UnsupportedDimension { dimension: usize },
    /// A norm or dot product overflowed to a non-finite value.
    NonFiniteMagnitude { value: f64 },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidInput { position, reason } => {
                write!(f, "invalid input at position {}: {}", position, reason)
            }
            VectorError::InvalidShape { row, len } => write!(
                f,
                "invalid column shape: row {} has {} elements, expected 1",
                row, len
            ),
            VectorError::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: {} vs {}", left, right)
            }
            VectorError::DegenerateVector { norm } => write!(
                f,
                "degenerate vector (norm = {}): angle is undefined",
                norm
            ),
            VectorError::UnsupportedDimension { dimension } => write!(
                f,
                "cross product is only defined for 2 or 3 dimensions, got {}",
                dimension
            ),
            VectorError::NonFiniteMagnitude { value } => write!(
                f,
                "magnitude is not finite ({}): angle is undefined",
                value
            ),
        }
    }
}

impl Error for VectorError {}

pub type Result<T> = std::result::Result<T, VectorError>;

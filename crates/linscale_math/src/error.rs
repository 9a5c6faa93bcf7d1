//! Math error types
//!
//! The value types are total except for a few documented preconditions.
//! The checked entry points report a violated precondition with [`MathError`].

use std::fmt;

/// Error type for checked vector and matrix operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// Normalizing a vector whose length is zero
    ZeroLength,
    /// Building an arbitrary-axis scale from a zero axis
    ZeroAxis,
    /// An input or result contained an infinite or NaN component
    NonFinite,
    /// A component slice did not have the expected number of entries
    DimensionMismatch { expected: usize, found: usize },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::ZeroLength => write!(f, "cannot normalize a zero-length vector"),
            MathError::ZeroAxis => write!(f, "scale axis must be non-zero"),
            MathError::NonFinite => write!(f, "infinite or NaN component"),
            MathError::DimensionMismatch { expected, found } => {
                write!(f, "expected {} components, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for MathError {}

/// Check that a component slice has exactly `expected` entries
pub(crate) fn check_len(components: &[f32], expected: usize) -> Result<(), MathError> {
    if components.len() == expected {
        Ok(())
    } else {
        Err(MathError::DimensionMismatch {
            expected,
            found: components.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_display() {
        let msg = format!("{}", MathError::ZeroLength);
        assert!(msg.contains("zero-length"));
    }

    #[test]
    fn test_zero_axis_display() {
        let msg = format!("{}", MathError::ZeroAxis);
        assert!(msg.contains("axis"));
    }

    #[test]
    fn test_non_finite_display() {
        let msg = format!("{}", MathError::NonFinite);
        assert!(msg.contains("NaN"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MathError::DimensionMismatch { expected: 3, found: 5 };
        let msg = format!("{}", err);
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("found 5"));
    }

    #[test]
    fn test_check_len() {
        assert!(check_len(&[1.0, 2.0], 2).is_ok());
        assert_eq!(
            check_len(&[1.0], 2),
            Err(MathError::DimensionMismatch { expected: 2, found: 1 })
        );
    }

    #[test]
    fn test_error_has_no_source() {
        use std::error::Error;
        assert!(MathError::ZeroAxis.source().is_none());
    }
}
